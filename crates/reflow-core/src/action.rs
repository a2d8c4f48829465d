//! Action trait for messages dispatched through a store

use std::fmt::Debug;

/// A message describing an intended state change.
///
/// Applications model actions as an enum, one variant per kind of change.
/// The store treats actions as opaque: it never inspects one beyond the
/// [`kind`](Action::kind) label, which is used for error reporting and
/// logging only.
pub trait Action: Debug {
    /// Discriminator label for this action.
    ///
    /// This plays the role of the conventional `type` field of a flux
    /// standard action.
    fn kind(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum Toggle {
        On,
        Off,
    }

    impl Action for Toggle {
        fn kind(&self) -> &str {
            match self {
                Toggle::On => "ON",
                Toggle::Off => "OFF",
            }
        }
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(Toggle::On.kind(), "ON");
        assert_eq!(Toggle::Off.kind(), "OFF");
    }
}
