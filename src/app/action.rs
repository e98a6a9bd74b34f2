/// Everything the user can ask for, whatever the input device.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    NextBoard,
    PreviousBoard,
    NextPage,
    PreviousPage,
    /// Move the keyboard focus within the button grid.
    FocusUp,
    FocusDown,
    FocusLeft,
    FocusRight,
    /// Press the focused button.
    PressFocused,
    /// Press the button at this slot of the current page.
    PressSlot(usize),
    Stop,
    Quit,
}
