/// UI intents consumed by the bridge.
#[derive(Debug)]
pub enum UiEvent {
    /// The selection control changed; carries its raw option value.
    RomSelected(String),
    /// The start/stop control was activated.
    ToggleRunStop,
}

/// Poll-based source of UI intents, injected into the bridge.
pub trait UiEventSource {
    fn poll_event(&mut self) -> Option<UiEvent>;

    /// Current raw value of the selection control. Read once when the
    /// runtime becomes ready, before any change event has fired.
    fn selected_value(&self) -> String;
}
