/// Navigation actions for an active debug session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    Continue,
    StepOver,
    StepInto,
    StepOut,
    Restart,
    Stop,
}

impl DebugAction {
    /// Parse the wire/prompt spelling of an action.
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "continue" => Some(Self::Continue),
            "next" | "stepOver" => Some(Self::StepOver),
            "stepIn" | "stepInto" => Some(Self::StepInto),
            "stepOut" => Some(Self::StepOut),
            "restart" => Some(Self::Restart),
            "stop" => Some(Self::Stop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::StepOver => "stepOver",
            Self::StepInto => "stepInto",
            Self::StepOut => "stepOut",
            Self::Restart => "restart",
            Self::Stop => "stop",
        }
    }
}
