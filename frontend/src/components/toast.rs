use std::cell::Cell;

use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient notification shown in the corner of the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Hands out a sequence number per shown notice. A dismiss timer records the
/// number it was started for and clears only while that number is still the
/// latest, so a timer left over from an earlier notice cannot cut a newer one
/// short.
#[derive(Debug, Default)]
pub struct NoticeSequence(Cell<u64>);

impl NoticeSequence {
    pub fn advance(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.0.get() == seq
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub notice: Option<Notice>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    let class = match notice.kind {
        NoticeKind::Success => "toast toast-success",
        NoticeKind::Error => "toast toast-error",
    };

    html! {
        <div class={class} role="alert">
            {&notice.message}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_sequence_number_stays_current_until_the_next_notice() {
        let seq = NoticeSequence::default();
        let first = seq.advance();
        assert!(seq.is_current(first));

        let second = seq.advance();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
