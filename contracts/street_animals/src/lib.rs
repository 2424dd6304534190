#![no_std]

mod errors;
mod events;
mod storage;
mod token;

pub use errors::AnimalError;
pub use storage::{Animal, Donation, PaymentRequest};

use events::{
    AnimalAddedEvent, AnimalStatusChangedEvent, DonationEvent, InitializedEvent,
    PaymentApprovedEvent, PaymentProcessedEvent, PaymentRequestedEvent,
};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Map, String, Symbol, Vec};
use storage::DataKey;

/// Loads the stored admin and checks that `caller` is it.
fn require_admin(env: &Env, caller: &Address) -> Result<(), AnimalError> {
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(AnimalError::NotInitialized)?;

    if *caller != admin {
        return Err(AnimalError::NotAuthorized);
    }

    caller.require_auth();
    Ok(())
}

/// Returns the counter stored under `key` and bumps it.
fn next_id(env: &Env, key: &DataKey) -> u32 {
    let id: u32 = env.storage().instance().get(key).unwrap_or(1);
    env.storage().instance().set(key, &(id + 1));
    id
}

fn append_index(env: &Env, key: &DataKey, id: u32) {
    let mut ids: Vec<u32> = env
        .storage()
        .persistent()
        .get(key)
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(key, &ids);
}

fn load_animal(env: &Env, animal_id: u32) -> Result<Animal, AnimalError> {
    env.storage()
        .persistent()
        .get(&DataKey::Animal(animal_id))
        .ok_or(AnimalError::AnimalNotFound)
}

fn store_animal(env: &Env, animal: &Animal) {
    env.storage()
        .persistent()
        .set(&DataKey::Animal(animal.id), animal);
}

fn load_payment_request(env: &Env, request_id: u32) -> Result<PaymentRequest, AnimalError> {
    env.storage()
        .persistent()
        .get(&DataKey::PaymentRequest(request_id))
        .ok_or(AnimalError::PaymentRequestNotFound)
}

fn stored_token(env: &Env) -> Result<Address, AnimalError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(AnimalError::NotInitialized)
}

#[contract]
pub struct StreetAnimalsContract;

#[contractimpl]
impl StreetAnimalsContract {
    /// Initialize the registry with an admin and the token donations are paid in
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), AnimalError> {
        // Check if already initialized
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(AnimalError::AlreadyInitialized);
        }

        // Require admin authorization
        admin.require_auth();

        // Store admin and donation token
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);

        // Initialize ID counters
        env.storage().instance().set(&DataKey::NextAnimalId, &1u32);
        env.storage().instance().set(&DataKey::NextDonationId, &1u32);
        env.storage()
            .instance()
            .set(&DataKey::NextPaymentRequestId, &1u32);

        // Emit Initialized event
        InitializedEvent { admin, token }.publish(&env);

        Ok(())
    }

    /// Register a new animal (admin only)
    pub fn add_animal(
        env: Env,
        admin: Address,
        name: String,
        description: String,
        target_amount: i128,
        beneficiary: Address,
    ) -> Result<u32, AnimalError> {
        // Verify admin identity and authorization
        require_admin(&env, &admin)?;

        // Validate target amount
        if target_amount <= 0 {
            return Err(AnimalError::InvalidAmount);
        }

        let animal_id = next_id(&env, &DataKey::NextAnimalId);

        // Create and store the animal
        let animal = Animal {
            id: animal_id,
            name,
            description,
            total_raised: 0,
            target_amount,
            is_active: true,
            beneficiary: beneficiary.clone(),
        };
        store_animal(&env, &animal);

        // Append to the animal list
        let mut animals: Vec<u32> = env
            .storage()
            .instance()
            .get(&DataKey::Animals)
            .unwrap_or(Vec::new(&env));
        animals.push_back(animal_id);
        env.storage().instance().set(&DataKey::Animals, &animals);

        // Emit AnimalAdded event
        AnimalAddedEvent {
            beneficiary,
            animal_id,
            target_amount,
        }
        .publish(&env);

        Ok(animal_id)
    }

    /// Get a single animal
    pub fn get_animal(env: Env, animal_id: u32) -> Result<Animal, AnimalError> {
        load_animal(&env, animal_id)
    }

    /// List every registered animal in registration order
    pub fn get_all_animals(env: Env) -> Vec<Animal> {
        let animal_ids: Vec<u32> = env
            .storage()
            .instance()
            .get(&DataKey::Animals)
            .unwrap_or(Vec::new(&env));

        let mut animals = Vec::new(&env);
        for id in animal_ids.iter() {
            if let Ok(animal) = load_animal(&env, id) {
                animals.push_back(animal);
            }
        }
        animals
    }

    /// Donate to an active animal
    pub fn donate(
        env: Env,
        donor: Address,
        animal_id: u32,
        amount: i128,
    ) -> Result<u32, AnimalError> {
        // Check if contract is initialized
        let token_address = stored_token(&env)?;

        // Require donor authorization
        donor.require_auth();

        // Validate amount
        if amount <= 0 {
            return Err(AnimalError::InvalidAmount);
        }

        // Check if animal is accepting donations
        let mut animal = load_animal(&env, animal_id)?;
        if !animal.is_active {
            return Err(AnimalError::AnimalNotActive);
        }

        // Transfer tokens from donor to contract
        let contract_address = env.current_contract_address();
        token::transfer(&env, &token_address, &donor, &contract_address, &amount);

        // Record the donation
        let donation_id = next_id(&env, &DataKey::NextDonationId);
        let donation = Donation {
            id: donation_id,
            donor: donor.clone(),
            animal_id,
            amount,
            timestamp: env.ledger().timestamp(),
        };
        env.storage()
            .persistent()
            .set(&DataKey::Donation(donation_id), &donation);
        append_index(&env, &DataKey::AnimalDonations(animal_id), donation_id);

        // Update animal total raised
        animal.total_raised += amount;
        store_animal(&env, &animal);

        // Emit Donation event
        DonationEvent {
            donor,
            animal_id,
            donation_id,
            amount,
        }
        .publish(&env);

        Ok(donation_id)
    }

    /// Open a payment request against an animal's funds (beneficiary only)
    pub fn create_payment_request(
        env: Env,
        requester: Address,
        animal_id: u32,
        amount: i128,
        description: String,
    ) -> Result<u32, AnimalError> {
        // Check if contract is initialized
        if !env.storage().instance().has(&DataKey::Admin) {
            return Err(AnimalError::NotInitialized);
        }

        // Require requester authorization
        requester.require_auth();

        // Only the beneficiary may draw on the funds
        let animal = load_animal(&env, animal_id)?;
        if requester != animal.beneficiary {
            return Err(AnimalError::NotAuthorized);
        }

        // Validate amount against funds raised
        if amount <= 0 {
            return Err(AnimalError::InvalidAmount);
        }
        if amount > animal.total_raised {
            return Err(AnimalError::InsufficientFunds);
        }

        // Store the pending request
        let request_id = next_id(&env, &DataKey::NextPaymentRequestId);
        let request = PaymentRequest {
            id: request_id,
            animal_id,
            requester: requester.clone(),
            amount,
            description,
            is_approved: false,
            is_paid: false,
            timestamp: env.ledger().timestamp(),
        };
        env.storage()
            .persistent()
            .set(&DataKey::PaymentRequest(request_id), &request);
        append_index(&env, &DataKey::AnimalPaymentRequests(animal_id), request_id);

        // Emit PaymentRequested event
        PaymentRequestedEvent {
            requester,
            animal_id,
            request_id,
            amount,
        }
        .publish(&env);

        Ok(request_id)
    }

    /// Approve a pending payment request (admin only)
    pub fn approve_payment_request(
        env: Env,
        admin: Address,
        request_id: u32,
    ) -> Result<(), AnimalError> {
        // Verify admin identity and authorization
        require_admin(&env, &admin)?;

        // Only pending requests can be approved
        let mut request = load_payment_request(&env, request_id)?;
        if request.is_approved || request.is_paid {
            return Err(AnimalError::PaymentRequestAlreadyProcessed);
        }

        request.is_approved = true;
        env.storage()
            .persistent()
            .set(&DataKey::PaymentRequest(request_id), &request);

        // Emit PaymentApproved event
        PaymentApprovedEvent { admin, request_id }.publish(&env);

        Ok(())
    }

    /// Pay out an approved request to its requester
    pub fn process_payment(env: Env, request_id: u32) -> Result<(), AnimalError> {
        // Check if contract is initialized
        let token_address = stored_token(&env)?;

        // Check request status
        let mut request = load_payment_request(&env, request_id)?;
        if request.is_paid {
            return Err(AnimalError::PaymentRequestAlreadyProcessed);
        }
        if !request.is_approved {
            return Err(AnimalError::PaymentRequestNotApproved);
        }

        // Funds may have been drawn by another request since this one was opened.
        let mut animal = load_animal(&env, request.animal_id)?;
        if request.amount > animal.total_raised {
            return Err(AnimalError::InsufficientFunds);
        }

        // Deduct from the animal's funds
        animal.total_raised -= request.amount;
        store_animal(&env, &animal);

        // Mark request as paid
        request.is_paid = true;
        env.storage()
            .persistent()
            .set(&DataKey::PaymentRequest(request_id), &request);

        // Transfer tokens from contract to requester
        let contract_address = env.current_contract_address();
        token::transfer(
            &env,
            &token_address,
            &contract_address,
            &request.requester,
            &request.amount,
        );

        // Emit PaymentProcessed event
        PaymentProcessedEvent {
            requester: request.requester,
            animal_id: request.animal_id,
            request_id,
            amount: request.amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Get a single payment request
    pub fn get_payment_request(env: Env, request_id: u32) -> Result<PaymentRequest, AnimalError> {
        load_payment_request(&env, request_id)
    }

    /// List the donations made to an animal, oldest first
    pub fn get_donations_for_animal(env: Env, animal_id: u32) -> Vec<Donation> {
        let ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::AnimalDonations(animal_id))
            .unwrap_or(Vec::new(&env));

        let mut donations = Vec::new(&env);
        for id in ids.iter() {
            if let Some(donation) = env
                .storage()
                .persistent()
                .get::<_, Donation>(&DataKey::Donation(id))
            {
                donations.push_back(donation);
            }
        }
        donations
    }

    /// List the payment requests opened against an animal, oldest first
    pub fn get_payment_requests_for_animal(env: Env, animal_id: u32) -> Vec<PaymentRequest> {
        let ids: Vec<u32> = env
            .storage()
            .persistent()
            .get(&DataKey::AnimalPaymentRequests(animal_id))
            .unwrap_or(Vec::new(&env));

        let mut requests = Vec::new(&env);
        for id in ids.iter() {
            if let Ok(request) = load_payment_request(&env, id) {
                requests.push_back(request);
            }
        }
        requests
    }

    /// Flip an animal between active and inactive (admin only)
    pub fn toggle_animal_status(
        env: Env,
        admin: Address,
        animal_id: u32,
    ) -> Result<bool, AnimalError> {
        // Verify admin identity and authorization
        require_admin(&env, &admin)?;

        // Flip status
        let mut animal = load_animal(&env, animal_id)?;
        animal.is_active = !animal.is_active;
        store_animal(&env, &animal);

        // Emit AnimalStatusChanged event
        AnimalStatusChangedEvent {
            admin,
            animal_id,
            is_active: animal.is_active,
        }
        .publish(&env);

        Ok(animal.is_active)
    }

    /// Registry totals: `tot_anim`, `act_anim` and `tot_fund`
    pub fn get_stats(env: Env) -> Map<Symbol, i128> {
        let mut total_animals = 0i128;
        let mut active_animals = 0i128;
        let mut total_raised = 0i128;

        for animal in Self::get_all_animals(env.clone()).iter() {
            total_animals += 1;
            total_raised += animal.total_raised;
            if animal.is_active {
                active_animals += 1;
            }
        }

        let mut stats = Map::new(&env);
        stats.set(symbol_short!("tot_anim"), total_animals);
        stats.set(symbol_short!("act_anim"), active_animals);
        stats.set(symbol_short!("tot_fund"), total_raised);
        stats
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Result<Address, AnimalError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(AnimalError::NotInitialized)
    }

    /// Get the donation token address
    pub fn get_token(env: Env) -> Result<Address, AnimalError> {
        stored_token(&env)
    }
}
