pub mod api;
pub mod components;
pub mod enrich;
pub mod markup;
pub mod pipeline;
pub mod placeholder;
