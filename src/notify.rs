/// Toasts kept on screen at once; a new toast evicts the oldest.
pub const TOAST_LIMIT: usize = 1;
pub const TOAST_DISMISS_MS: i32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Destructive,
}

impl ToastVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Destructive => "toast-destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Success,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: ToastVariant::Destructive,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedToast {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    visible: Vec<QueuedToast>,
}

impl ToastQueue {
    /// Queues `toast` and returns the id to dismiss it with.
    pub fn push(&mut self, toast: Toast) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.visible.insert(0, QueuedToast { id, toast });
        self.visible.truncate(TOAST_LIMIT);
        id
    }

    /// Removes the toast if it is still shown; stale ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.visible.retain(|queued| queued.id != id);
    }

    pub fn visible(&self) -> &[QueuedToast] {
        &self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_replaces_older_one() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Toast::success("Message Sent!", "Thanks"));
        let second = queue.push(Toast::destructive("Failed to Send", "offline"));

        assert_ne!(first, second);
        assert_eq!(queue.visible().len(), TOAST_LIMIT);
        assert_eq!(queue.visible()[0].id, second);
        assert_eq!(queue.visible()[0].toast.variant, ToastVariant::Destructive);
    }

    #[test]
    fn dismissing_a_stale_id_keeps_current_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(Toast::success("a", "b"));
        let second = queue.push(Toast::success("c", "d"));

        queue.dismiss(first);
        assert_eq!(queue.visible()[0].id, second);

        queue.dismiss(second);
        assert!(queue.visible().is_empty());
    }
}
