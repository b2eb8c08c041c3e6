
/// Size reported by a container, either an exact count or unlimited.
///
/// `len()` always yields an exact [`QueueSize::Limited`] count; `capacity()`
/// yields [`QueueSize::Limitless`] for the unbounded containers in this
/// crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueSize {
  /// No bound applies.
  Limitless,
  /// Exactly the contained value.
  Limited(usize),
}

impl QueueSize {
  /// Constant constructor for the unbounded variant.
  #[must_use]
  pub const fn limitless() -> Self {
    Self::Limitless
  }

  /// Constant constructor for an exact size.
  #[must_use]
  pub const fn limited(value: usize) -> Self {
    Self::Limited(value)
  }

  /// Whether this size is unbounded.
  #[must_use]
  pub const fn is_limitless(&self) -> bool {
    matches!(self, Self::Limitless)
  }

  /// The size as `usize`, saturating to `usize::MAX` when unbounded.
  #[must_use]
  pub const fn to_usize(self) -> usize {
    match self {
      | Self::Limitless => usize::MAX,
      | Self::Limited(value) => value,
    }
  }
}

impl Default for QueueSize {
  fn default() -> Self {
    QueueSize::limited(0)
  }
}
