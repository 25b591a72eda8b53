#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    View,
    Edit,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::View => "VIEW",
            Mode::Edit => "EDIT",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Mode::View => "Press e to edit or q to quit.",
            Mode::Edit => "Press Esc to return to view.",
        }
    }
}
