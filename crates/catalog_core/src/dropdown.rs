/// A selectable entry in the category menu. The empty value means "all".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

impl CategoryOption {
    pub fn all() -> Self {
        Self {
            value: String::new(),
            label: "All Types".to_string(),
        }
    }

    pub fn category(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open { focus: Option<usize> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownKey {
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownInput {
    Key(DropdownKey),
    TriggerClicked,
    ItemClicked(usize),
    OutsideClicked,
}

/// Keyboard and pointer navigation over a fixed option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDropdown {
    options: Vec<CategoryOption>,
    state: DropdownState,
    selected: usize,
}

impl Default for CategoryDropdown {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CategoryDropdown {
    /// The "all" option is always inserted first.
    pub fn new(categories: Vec<String>) -> Self {
        let mut options = Vec::with_capacity(categories.len() + 1);
        options.push(CategoryOption::all());
        options.extend(categories.into_iter().map(CategoryOption::category));
        Self {
            options,
            state: DropdownState::Closed,
            selected: 0,
        }
    }

    pub fn options(&self) -> &[CategoryOption] {
        &self.options
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn selected(&self) -> &CategoryOption {
        &self.options[self.selected]
    }

    /// Moves the selection to `value` without emitting. Returns false for unknown values.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|option| option.value == value) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Applies one input. Returns the chosen category value when a selection happens.
    pub fn handle(&mut self, input: DropdownInput) -> Option<String> {
        match (self.state, input) {
            (DropdownState::Closed, DropdownInput::TriggerClicked) => {
                self.open();
                None
            }
            (DropdownState::Open { .. }, DropdownInput::TriggerClicked)
            | (DropdownState::Open { .. }, DropdownInput::OutsideClicked) => {
                self.close();
                None
            }
            (_, DropdownInput::ItemClicked(index)) => self.select(index),
            (DropdownState::Closed, DropdownInput::Key(key)) => {
                if matches!(
                    key,
                    DropdownKey::Enter | DropdownKey::Space | DropdownKey::ArrowDown
                ) {
                    self.open();
                }
                None
            }
            (DropdownState::Open { focus }, DropdownInput::Key(key)) => {
                let last = self.options.len() - 1;
                let focus = match key {
                    DropdownKey::Enter | DropdownKey::Space => {
                        return focus.and_then(|index| self.select(index));
                    }
                    DropdownKey::ArrowDown => focus.map_or(0, |index| (index + 1).min(last)),
                    DropdownKey::ArrowUp => focus.map_or(0, |index| index.saturating_sub(1)),
                    DropdownKey::Home => 0,
                    DropdownKey::End => last,
                    DropdownKey::Escape => {
                        self.close();
                        return None;
                    }
                };
                self.state = DropdownState::Open { focus: Some(focus) };
                None
            }
            (DropdownState::Closed, DropdownInput::OutsideClicked) => None,
        }
    }

    fn open(&mut self) {
        self.state = DropdownState::Open { focus: None };
    }

    fn close(&mut self) {
        self.state = DropdownState::Closed;
    }

    fn select(&mut self, index: usize) -> Option<String> {
        if index >= self.options.len() {
            return None;
        }
        self.selected = index;
        self.close();
        Some(self.options[index].value.clone())
    }
}
