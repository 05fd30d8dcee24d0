use crate::artifacts::diff::DiffOptions;
use crate::artifacts::diff::diff_algorithm::LineDiff;
use std::cell::{RefCell, RefMut};

pub struct Workbench {
    writer: RefCell<Box<dyn std::io::Write>>,
    options: DiffOptions,
}

impl Workbench {
    pub fn new(writer: Box<dyn std::io::Write>, options: DiffOptions) -> Self {
        Workbench {
            writer: RefCell::new(writer),
            options,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    pub fn line_diff(&self) -> LineDiff {
        LineDiff::new(self.options.max_lines)
    }
}
