//! Chat-completion client with ordered model fallback

pub mod client;
pub mod messages;
pub mod transport;


pub use client::{Completion, FallbackClient};
pub use messages::{ChatMessage, ChatRequest, ChatResponse, ChatRole, SamplingParams, Usage};
pub use transport::{ChatTransport, HttpTransport};
