use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,                      // -> Address
    Token,                      // -> Address
    Animals,                    // -> Vec<u32>
    Animal(u32),                // animal_id -> Animal
    Donation(u32),              // donation_id -> Donation
    AnimalDonations(u32),       // animal_id -> Vec<u32>
    PaymentRequest(u32),        // request_id -> PaymentRequest
    AnimalPaymentRequests(u32), // animal_id -> Vec<u32>
    NextAnimalId,               // -> u32
    NextDonationId,             // -> u32
    NextPaymentRequestId,       // -> u32
}

/// A street animal the registry collects funds for.
///
/// `beneficiary` is the volunteer allowed to draw on `total_raised`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Animal {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub total_raised: i128,
    pub target_amount: i128,
    pub is_active: bool,
    pub beneficiary: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Donation {
    pub id: u32,
    pub donor: Address,
    pub animal_id: u32,
    pub amount: i128,
    pub timestamp: u64,
}

/// A beneficiary's request to spend part of an animal's funds.
///
/// Moves from pending to approved (admin) to paid, never backwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentRequest {
    pub id: u32,
    pub animal_id: u32,
    pub requester: Address,
    pub amount: i128,
    pub description: String,
    pub is_approved: bool,
    pub is_paid: bool,
    pub timestamp: u64,
}
