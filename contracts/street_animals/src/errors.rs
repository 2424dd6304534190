use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AnimalError {
    NotAuthorized = 1,
    AnimalNotFound = 2,
    AnimalNotActive = 3,
    InsufficientFunds = 4,
    PaymentRequestNotFound = 5,
    PaymentRequestAlreadyProcessed = 6,
    NotInitialized = 7,
    AlreadyInitialized = 8,
    InvalidAmount = 9,
    PaymentRequestNotApproved = 10,
}
