// Composition root for the projects bounded context.
//
// Responsibilities
// - Read config from environment.
// - Pick the record store implementation.
// - Wire the store into use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
