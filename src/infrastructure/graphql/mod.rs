pub mod request;
pub mod response;
pub mod transport;

pub use request::{build_request, query_document, GraphqlRequest, OPERATION_NAME};
pub use response::decode_page;
pub use transport::{GraphqlClient, GraphqlQueryTransport, GraphqlResponse};
