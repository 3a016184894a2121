use commons::{ContractEvent, ContractTokenId};
use concordium_cis2::*;
use concordium_std::*;

/// Build the metadata URL of a token: the base URI followed by the token's
/// suffix, or by the token ID in decimal when it has none.
pub fn build_token_uri(
    base_uri: &str,
    token_id: &ContractTokenId,
    uri_suffix: Option<&str>,
) -> String {
    let mut token_uri = String::from(base_uri);
    match uri_suffix {
        Some(suffix) => token_uri.push_str(suffix),
        None => token_uri.push_str(&token_id.0.to_string()),
    }
    token_uri
}

pub fn mint_event(token_id: ContractTokenId, owner: Address) -> ContractEvent {
    Cis2Event::Mint(MintEvent {
        token_id,
        amount: TokenAmountU8(1),
        owner,
    })
}

pub fn burn_event(token_id: ContractTokenId, owner: Address) -> ContractEvent {
    Cis2Event::Burn(BurnEvent {
        token_id,
        amount: TokenAmountU8(1),
        owner,
    })
}

pub fn transfer_event(token_id: ContractTokenId, from: Address, to: Address) -> ContractEvent {
    Cis2Event::Transfer(TransferEvent {
        token_id,
        amount: TokenAmountU8(1),
        from,
        to,
    })
}

pub fn token_metadata_event(token_id: ContractTokenId, url: String) -> ContractEvent {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id,
        metadata_url: MetadataUrl { url, hash: None },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn token_uri_uses_suffix_when_present() {
        let uri = build_token_uri("https://poap.test/token/", &TokenIdU64(7), Some("abc.json"));
        claim_eq!(uri, "https://poap.test/token/abc.json");
    }

    #[concordium_test]
    fn token_uri_falls_back_to_decimal_id() {
        let uri = build_token_uri("https://poap.test/token/", &TokenIdU64(1234), None);
        claim_eq!(uri, "https://poap.test/token/1234");

        let uri = build_token_uri("", &TokenIdU64(1), None);
        claim_eq!(uri, "1");
    }
}
