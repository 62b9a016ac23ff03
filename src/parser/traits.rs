use crate::data_models::ProductSnapshot;
use crate::parser::errors::ParserError;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::Duration;
use url::Url;

/// Browser identity sent with every request, the API blocks the default one.
pub const USER_AGENT: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 9_1 like Mac OS X) AppleWebKit/601.1.46 (KHTML, like Gecko) Version/9.0 Mobile/13B143 Safari/601.1";
pub const ITEM_QUERY_KEY: &str = "ItemNumber";

pub trait Parser {
    fn create_client(timeout: Option<Duration>) -> Result<Client, ParserError> {
        let mut client = Client::builder()
            .redirect(Policy::limited(30))
            .user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            client = client.timeout(timeout);
        }
        client.build().map_err(ParserError::FailedClient)
    }

    fn item_url(base: &Url, item: &str) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut().append_pair(ITEM_QUERY_KEY, item);
        url
    }
}

/// Where the watch loop gets product data from.
pub trait ProductSource {
    fn product_url(&self, item: &str) -> Url;

    fn fetch(&self, item: &str) -> Result<ProductSnapshot, ParserError>;
}

impl<T: ProductSource + ?Sized> ProductSource for &T {
    fn product_url(&self, item: &str) -> Url {
        (**self).product_url(item)
    }

    fn fetch(&self, item: &str) -> Result<ProductSnapshot, ParserError> {
        (**self).fetch(item)
    }
}
