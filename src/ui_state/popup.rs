#[derive(Debug, Default)]
pub struct PopupState {
    current: PopupType,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub enum PopupType {
    #[default]
    None,
    Error(String),
}

impl PopupState {
    pub fn open(&mut self, popup: PopupType) {
        self.current = popup;
    }

    pub fn close(&mut self) {
        self.current = PopupType::None;
    }

    pub fn is_open(&self) -> bool {
        self.current != PopupType::None
    }

    pub fn current(&self) -> &PopupType {
        &self.current
    }
}
