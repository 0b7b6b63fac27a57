//! Address picker
//!
//! Looks up candidate addresses for a UK postcode. Reuses the
//! [`Address`](crate::resources::applicants::Address) record.

use super::applicants::Address;
use super::NONE;
use crate::client::IdcheckClient;
use crate::error::ApiResult;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Addresses API interface
#[derive(Clone)]
pub struct AddressesApi {
    client: IdcheckClient,
}

impl AddressesApi {
    pub(crate) fn new(client: IdcheckClient) -> Self {
        Self { client }
    }

    /// Look up addresses matching a postcode.
    ///
    /// GET `addresses/pick`
    pub async fn pick(&self, postcode: &str) -> ApiResult<Vec<Address>> {
        let envelope: AddressList = self
            .client
            .request(
                Method::GET,
                "addresses/pick",
                NONE,
                Some(&PickQuery { postcode }),
            )
            .await?;
        Ok(envelope.addresses)
    }
}

#[derive(Serialize)]
struct PickQuery<'a> {
    postcode: &'a str,
}

#[derive(Deserialize)]
struct AddressList {
    addresses: Vec<Address>,
}
