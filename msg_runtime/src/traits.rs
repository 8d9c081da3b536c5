use crate::errors::MessageResult;

/// Finalizing half of the builder contract.
///
/// `build` consumes the builder, so a builder can never be observed or
/// mutated after it produced a message. To derive a new message from an
/// existing one, start again from [`Message::to_builder`].
pub trait Builder: Sized {
    type Output: Message;

    fn build(self) -> MessageResult<Self::Output>;
}

/// Immutable, shareable record produced by a [`Builder`].
pub trait Message: Clone + PartialEq + Send + Sync + 'static {
    type Builder: Builder<Output = Self>;

    /// Package-qualified name of the message type.
    fn full_name(&self) -> &str;

    /// Builder pre-filled with a copy of this message's fields.
    fn to_builder(&self) -> Self::Builder;
}
