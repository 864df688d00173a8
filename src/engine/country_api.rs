use super::Engine;

use async_trait::async_trait;

use crate::{
    api::CountryAPI,
    entities::{resolve_country, CountryConfig, COUNTRIES},
    error::Error,
};

#[async_trait]
impl CountryAPI for Engine {
    async fn list_countries(&self) -> Result<Vec<CountryConfig>, Error> {
        Ok(COUNTRIES.to_vec())
    }

    #[tracing::instrument(skip(self))]
    async fn find_country(&self, code: String) -> Result<CountryConfig, Error> {
        Ok(resolve_country(Some(&code)).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn country_api_test() {
        let engine = Engine::new(&Config::default()).unwrap();

        let countries = tokio_test::block_on(engine.list_countries()).unwrap();
        assert_eq!(countries.len(), 10);
        assert_eq!(countries[0].code, "US");

        let brazil = tokio_test::block_on(engine.find_country("br".into())).unwrap();
        assert_eq!(brazil.currency_symbol, "R$");

        let unknown = tokio_test::block_on(engine.find_country("ZZ".into())).unwrap();
        assert_eq!(unknown.code, "US");
    }
}
