/* Message Runtime Library

   This library provides the immutable message / fluent builder core.
   Builders accumulate field values by value, and build() moves the
   accumulated storage into a frozen message that can be shared freely
   between readers without synchronization.
*/

pub mod builder;
pub mod errors;
pub mod formatter;
pub mod message;
pub mod repeated;
pub mod traits;
pub mod value;

pub use builder::DynamicBuilder;
pub use errors::{MessageError, MessageResult};
pub use message::DynamicMessage;
pub use repeated::RepeatedField;
pub use traits::{Builder, Message};
pub use value::Value;

pub use msg_types;
