//! Request and response shapes passed through the resolvers.
//!
//! - [`inputs`]: argument records, one per GraphQL operation
//! - [`payloads`]: search/recommendation backend results
//! - [`product`]: catalog products from the search GraphQL endpoint

pub mod inputs;
pub mod payloads;
pub mod product;

pub use inputs::{SearchResultInput, SuggestionProductsInput, SuggestionSearchesInput};
pub use payloads::{
    SearchResultPayload, SuggestionProductsOutput, SuggestionSearchesPayload, TopSearchesPayload,
};
pub use product::{ExtraInfo, ProductProperty, SearchProduct};
