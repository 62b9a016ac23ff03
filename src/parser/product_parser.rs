use crate::configuration::ApiSettings;
use crate::data_models::{ProductPayload, ProductSnapshot};
use crate::parser::errors::ParserError;
use crate::parser::traits::{Parser, ProductSource};
use reqwest::blocking::Client;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct ProductParser {
    client: Client,
    base_url: Url,
}

impl Parser for ProductParser {}

impl ProductParser {
    pub fn new(settings: &ApiSettings) -> Result<Self, ParserError> {
        let base_url = Url::from_str(&settings.url)?;
        let client = Self::create_client(settings.timeout_secs.map(Duration::from_secs))?;
        Ok(Self { client, base_url })
    }

    pub fn decode(body: &str) -> Result<ProductSnapshot, ParserError> {
        let payload: ProductPayload = serde_json::from_str(body)?;
        Ok(payload.into())
    }
}

impl ProductSource for ProductParser {
    fn product_url(&self, item: &str) -> Url {
        Self::item_url(&self.base_url, item)
    }

    fn fetch(&self, item: &str) -> Result<ProductSnapshot, ParserError> {
        // the response is consumed here, nothing outlives one item
        let response_text = self
            .client
            .get(self.product_url(item))
            .send()?
            .error_for_status()?
            .text()?;
        Self::decode(&response_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_parser(url: &str) -> ProductParser {
        let settings = ApiSettings {
            url: url.to_string(),
            timeout_secs: Some(5),
        };
        ProductParser::new(&settings).expect("Failed to create parser")
    }

    #[test]
    fn product_url_works() {
        let parser = create_parser("https://www.newegg.com/product/api/ProductRealtime");
        assert_eq!(
            parser.product_url("N82E16814137598").as_str(),
            "https://www.newegg.com/product/api/ProductRealtime?ItemNumber=N82E16814137598"
        );
    }

    #[test]
    fn product_url_escapes_item() {
        let parser = create_parser("https://example.com/api");
        assert_eq!(
            parser.product_url("a b&c").as_str(),
            "https://example.com/api?ItemNumber=a+b%26c"
        );
    }

    #[test]
    fn product_url_keeps_existing_query() {
        let parser = create_parser("https://example.com/api?region=us");
        assert_eq!(
            parser.product_url("1").as_str(),
            "https://example.com/api?region=us&ItemNumber=1"
        );
    }

    #[test]
    fn bad_base_url_fails() {
        let settings = ApiSettings {
            url: "not a url".to_string(),
            timeout_secs: None,
        };
        assert!(matches!(
            ProductParser::new(&settings),
            Err(ParserError::UrlParsingError(_))
        ));
    }

    #[test]
    fn decode_works() {
        let snapshot = ProductParser::decode(
            r#"{"MainItem":{"Description":{"Title":"SSD"},"Instock":false,"FinalPrice":54.5,"Stock":0,"AddToCartType":2},"Additional":{"LimitQuantity":5}}"#,
        )
        .expect("Failed to decode");
        assert_eq!(snapshot.title, "SSD");
        assert!(!snapshot.in_stock);
        assert_eq!(snapshot.cart_eligibility, 2);
        assert_eq!(snapshot.purchase_limit, 5);
    }

    #[test]
    fn decode_html_fails() {
        let res = ProductParser::decode("<html><body>Are you a human?</body></html>");
        assert!(matches!(res, Err(ParserError::DecodeError(_))));
    }
}
