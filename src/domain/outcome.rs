/// Result of a keyboard action. Actions never fail towards the host; an action
/// that cannot be carried out is skipped and leaves the state untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Applied,
    Skipped(SkipReason),
}

impl ActionOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, ActionOutcome::Applied)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    UnknownLayout,
    ManualChoiceKept,
    AlreadyActive,
    KeyOutOfRange,
    NoActiveGesture,
    StaleSample,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::UnknownLayout => "unknown_layout",
            SkipReason::ManualChoiceKept => "manual_choice_kept",
            SkipReason::AlreadyActive => "already_active",
            SkipReason::KeyOutOfRange => "key_out_of_range",
            SkipReason::NoActiveGesture => "no_active_gesture",
            SkipReason::StaleSample => "stale_sample",
        }
    }
}
