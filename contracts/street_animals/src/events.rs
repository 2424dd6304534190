use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub token: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnimalAddedEvent {
    #[topic]
    pub beneficiary: Address,
    pub animal_id: u32,
    pub target_amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DonationEvent {
    #[topic]
    pub donor: Address,
    #[topic]
    pub animal_id: u32,
    pub donation_id: u32,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentRequestedEvent {
    #[topic]
    pub requester: Address,
    #[topic]
    pub animal_id: u32,
    pub request_id: u32,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentApprovedEvent {
    #[topic]
    pub admin: Address,
    pub request_id: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentProcessedEvent {
    #[topic]
    pub requester: Address,
    #[topic]
    pub animal_id: u32,
    pub request_id: u32,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnimalStatusChangedEvent {
    #[topic]
    pub admin: Address,
    pub animal_id: u32,
    pub is_active: bool,
}
