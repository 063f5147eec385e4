use chains::{AddChainParameters, ChainId, ChainInfo, ChainRegistry, NativeCurrency, ProviderKeys};

const KEYED_ONLY: [u64; 5] = [3, 4, 5, 42, 80001];

fn no_keys() -> ChainRegistry {
    ChainRegistry::new(&ProviderKeys::default())
}

fn all_keys() -> ChainRegistry {
    ChainRegistry::new(&ProviderKeys::new(
        Some("infura-key".to_owned()),
        Some("alchemy-key".to_owned()),
    ))
}

#[test]
fn builtin_table_has_every_chain() {
    let registry = no_keys();
    assert_eq!(registry.len(), 17);
    for id in [1, 3, 4, 5, 42, 10, 69, 42161, 421_611, 137, 80001, 43114, 43113, 250, 4002, 56, 97] {
        assert!(registry.contains(ChainId::new(id)), "chain {id}");
    }
}

#[test]
fn resolver_never_answers_for_another_chain() {
    for registry in [no_keys(), all_keys()] {
        for (id, _) in registry.iter() {
            assert_eq!(registry.add_chain_parameters(id).chain_id(), id);
        }
    }
}

#[test]
fn resolver_follows_record_variant() {
    let registry = all_keys();
    for (id, info) in registry.iter() {
        match (info, registry.add_chain_parameters(id)) {
            (ChainInfo::Extended(ext), AddChainParameters::Add(add)) => {
                assert_eq!(add.rpc_urls, ext.basic.urls);
                assert_eq!(add.chain_name, ext.basic.name);
                assert_eq!(add.native_currency, ext.native_currency);
                assert_eq!(add.block_explorer_urls, ext.block_explorer_urls);
            }
            (ChainInfo::Basic(_), AddChainParameters::Switch(switch)) => assert_eq!(switch, id),
            (info, params) => panic!("chain {id}: {info:?} resolved to {params:?}"),
        }
    }
}

#[test]
fn resolver_is_idempotent() {
    let registry = no_keys();
    for id in [1, 10, 137, 9999] {
        let id = ChainId::new(id);
        assert_eq!(registry.add_chain_parameters(id), registry.add_chain_parameters(id));
    }
}

#[test]
fn optimism_descriptor() {
    let params = no_keys().add_chain_parameters(ChainId::new(10));
    let AddChainParameters::Add(add) = params else {
        panic!("expected descriptor, got {params:?}");
    };
    assert_eq!(add.chain_id, ChainId::new(10));
    assert_eq!(add.chain_name, "Optimistic Ethereum");
    assert_eq!(add.native_currency, NativeCurrency::new("Ether", "ETH", 18));
    assert_eq!(add.block_explorer_urls, Some(vec!["https://optimistic.etherscan.io".to_owned()]));
}

#[test]
fn mainnet_and_unknown_resolve_to_id() {
    let registry = no_keys();
    assert_eq!(
        registry.add_chain_parameters(ChainId::new(1)),
        AddChainParameters::Switch(ChainId::new(1))
    );
    assert_eq!(
        chains::add_chain_parameters(&registry, ChainId::new(9999)),
        AddChainParameters::Switch(ChainId::new(9999))
    );
}

#[test]
fn mainnet_without_keys_uses_public_endpoint() {
    let registry = no_keys();
    assert_eq!(
        registry.get(ChainId::new(1)).map(ChainInfo::urls),
        Some(&["https://cloudflare-eth.com".to_owned()][..])
    );
}

#[test]
fn keyed_endpoints_come_before_public_ones() {
    let registry = all_keys();
    assert_eq!(
        registry.get(ChainId::new(1)).map(ChainInfo::urls),
        Some(
            &[
                "https://mainnet.infura.io/v3/infura-key".to_owned(),
                "https://eth-mainnet.alchemyapi.io/v2/alchemy-key".to_owned(),
                "https://cloudflare-eth.com".to_owned(),
            ][..]
        )
    );

    let infura_only = ChainRegistry::new(&ProviderKeys::new(Some("k".to_owned()), None));
    assert_eq!(
        infura_only.get(ChainId::new(42161)).map(ChainInfo::urls),
        Some(
            &[
                "https://arbitrum-mainnet.infura.io/v3/k".to_owned(),
                "https://arb1.arbitrum.io/rpc".to_owned(),
            ][..]
        )
    );
}

#[test]
fn url_index_matches_registry() {
    for registry in [no_keys(), all_keys()] {
        let index = registry.url_index();
        for (id, info) in registry.iter() {
            match index.get(id) {
                Some(urls) => assert_eq!(urls, info.urls(), "chain {id}"),
                None => assert!(info.urls().is_empty(), "chain {id}"),
            }
        }
        for id in index.keys() {
            assert!(registry.contains(*id));
        }
    }
}

#[test]
fn keyed_only_chains_leave_index_without_keys() {
    let without = no_keys();
    let with = all_keys();
    for id in KEYED_ONLY.map(ChainId::new) {
        assert!(without.contains(id));
        assert!(without.url_index().get(id).is_none(), "chain {id}");
        assert!(with.url_index().get(id).is_some(), "chain {id}");
    }
    assert_eq!(without.url_index().len(), without.len() - KEYED_ONLY.len());
    assert_eq!(with.url_index().len(), with.len());
}

#[test]
fn blank_keys_behave_like_missing_ones() {
    let blank = ChainRegistry::new(&ProviderKeys::new(Some(String::new()), Some(" ".to_owned())));
    assert_eq!(blank, no_keys());
}

#[test]
fn urls_never_contain_empty_strings() {
    for registry in [no_keys(), all_keys()] {
        for (_, info) in registry.iter() {
            assert!(info.urls().iter().all(|url| !url.is_empty()));
        }
    }
}
