#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use pawguardians::{
    AnimalCard, BackendError, DonateOutcome, DonationBackend, DonationPage, Locale, Notifier,
    PageConfig, StaticWallet,
};
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env, String,
};
use street_animals::{StreetAnimalsContract, StreetAnimalsContractClient as RegistryClient};

const STROOPS_PER_XLM: f64 = 10_000_000.0;

/// Sends the page's donations to the registry contract instead of a timer.
struct ContractBackend<'a> {
    env: Env,
    registry: RegistryClient<'a>,
}

impl DonationBackend for ContractBackend<'_> {
    async fn submit(
        &self,
        donor: &str,
        animal: &AnimalCard,
        amount: f64,
    ) -> Result<(), BackendError> {
        let donor = Address::from_string(&String::from_str(&self.env, donor));
        let stroops = (amount * STROOPS_PER_XLM).round() as i128;

        match self.registry.try_donate(&donor, &animal.id, &stroops) {
            Ok(Ok(_)) => Ok(()),
            Err(Ok(error)) => Err(BackendError::Rejected(format!("{error:?}"))),
            other => Err(BackendError::Unavailable(format!("{other:?}"))),
        }
    }
}

#[derive(Clone, Default)]
struct Alerts(Rc<RefCell<Vec<std::string::String>>>);

impl Notifier for Alerts {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

fn strkey(address: &Address) -> std::string::String {
    let text = address.to_string();
    let mut buf = [0u8; 56];
    text.copy_into_slice(&mut buf[..text.len() as usize]);
    std::str::from_utf8(&buf[..text.len() as usize])
        .unwrap()
        .to_string()
}

struct Protocol<'a> {
    registry: RegistryClient<'a>,
    token: TokenClient<'a>,
    admin: Address,
    donor: Address,
    beneficiary: Address,
    registry_id: Address,
}

/// Registers the token and the registry, then mirrors the page's three cards on-chain.
fn deploy<'a>(env: &Env) -> Protocol<'a> {
    let admin = Address::generate(env);
    let donor = Address::generate(env);
    let beneficiary = Address::generate(env);

    let asset = env.register_stellar_asset_contract_v2(admin.clone());
    let token = TokenClient::new(env, &asset.address());
    StellarAssetClient::new(env, &asset.address())
        .mint(&donor, &(1_000 * STROOPS_PER_XLM as i128));

    let registry_id = env.register(StreetAnimalsContract, ());
    let registry = RegistryClient::new(env, &registry_id);
    registry.initialize(&admin, &token.address);

    for card in pawguardians::catalog::animals(Locale::Tr) {
        let id = registry.add_animal(
            &admin,
            &String::from_str(env, card.name),
            &String::from_str(env, card.description),
            &((card.target * STROOPS_PER_XLM) as i128),
            &beneficiary,
        );
        assert_eq!(id, card.id);
    }

    Protocol {
        registry,
        token,
        admin,
        donor,
        beneficiary,
        registry_id,
    }
}

fn page_for<'a>(
    env: &Env,
    protocol: &Protocol<'a>,
) -> (DonationPage<StaticWallet, ContractBackend<'a>, Alerts>, Alerts) {
    let alerts = Alerts::default();
    let backend = ContractBackend {
        env: env.clone(),
        registry: RegistryClient::new(env, &protocol.registry_id),
    };
    let page = DonationPage::new(
        &PageConfig::default(),
        StaticWallet::new(strkey(&protocol.donor)),
        backend,
        alerts.clone(),
    );
    (page, alerts)
}

#[tokio::test]
async fn test_page_donation_reaches_registry() {
    let env = Env::default();
    env.mock_all_auths();

    let protocol = deploy(&env);
    let (mut page, alerts) = page_for(&env, &protocol);

    page.mount().await;
    page.select(2);
    page.set_amount("12.5");
    assert!(page.can_donate());

    assert_eq!(page.donate().await, DonateOutcome::Completed);
    assert_eq!(
        *alerts.0.borrow(),
        vec!["Karabaş için 12.5 XLM bağışınız başarıyla yapıldı!".to_string()]
    );

    // 12.5 XLM in stroops
    let animal = protocol.registry.get_animal(&2);
    assert_eq!(animal.total_raised, 125_000_000);
    assert_eq!(protocol.token.balance(&protocol.registry_id), 125_000_000);

    let donations = protocol.registry.get_donations_for_animal(&2);
    assert_eq!(donations.len(), 1);
    assert_eq!(donations.get(0).unwrap().donor, protocol.donor);
}

#[tokio::test]
async fn test_inactive_animal_surfaces_as_failed_donation() {
    let env = Env::default();
    env.mock_all_auths();

    let protocol = deploy(&env);
    protocol.registry.toggle_animal_status(&protocol.admin, &1);

    let (mut page, alerts) = page_for(&env, &protocol);
    page.mount().await;
    page.select(1);

    assert_eq!(page.donate().await, DonateOutcome::Failed);
    assert_eq!(
        *alerts.0.borrow(),
        vec![Locale::Tr.messages().donation_failed.to_string()]
    );
    assert_eq!(page.selected().map(|card| card.id), Some(1));
    assert_eq!(protocol.registry.get_animal(&1).total_raised, 0);
}

#[tokio::test]
async fn test_donations_fund_beneficiary_payout() {
    let env = Env::default();
    env.mock_all_auths();

    let protocol = deploy(&env);
    let (mut page, _) = page_for(&env, &protocol);
    page.mount().await;

    page.select(3);
    page.set_amount("40");
    assert_eq!(page.donate().await, DonateOutcome::Completed);

    let request_id = protocol.registry.create_payment_request(
        &protocol.beneficiary,
        &3,
        &(25 * STROOPS_PER_XLM as i128),
        &String::from_str(&env, "Mama"),
    );
    protocol
        .registry
        .approve_payment_request(&protocol.admin, &request_id);
    protocol.registry.process_payment(&request_id);

    assert_eq!(
        protocol.token.balance(&protocol.beneficiary),
        25 * STROOPS_PER_XLM as i128
    );
    assert_eq!(
        protocol.registry.get_animal(&3).total_raised,
        15 * STROOPS_PER_XLM as i128
    );
}

#[tokio::test]
async fn test_contract_errors_map_to_rejected_donations() {
    let env = Env::default();
    env.mock_all_auths();

    let protocol = deploy(&env);
    protocol.registry.toggle_animal_status(&protocol.admin, &1);

    let backend = ContractBackend {
        env: env.clone(),
        registry: RegistryClient::new(&env, &protocol.registry_id),
    };
    let card = pawguardians::catalog::find(Locale::Tr, 1).unwrap();

    let result = backend.submit(&strkey(&protocol.donor), &card, 5.0).await;
    assert!(matches!(
        result,
        Err(BackendError::Rejected(message)) if message.contains("AnimalNotActive")
    ));
}
