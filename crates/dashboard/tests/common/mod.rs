//! Shared test doubles for dashboard integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::sync::Mutex;

use async_trait::async_trait;
use listings_core::listing::{ListingCategory, ListingType};
use listings_core::types::DbId;
use listings_dashboard::client::{ClientError, ListingsApi};
use listings_dashboard::interaction::Interaction;
use listings_dashboard::model::{Listing, NewListing};

/// A request seen by [`FakeApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create(NewListing),
    Update(Listing),
    Delete(DbId),
}

#[derive(Default)]
struct FakeState {
    listings: Vec<Listing>,
    next_id: DbId,
    calls: Vec<Call>,
    fail_list: bool,
    fail_writes: bool,
}

/// In-memory listings service.
#[derive(Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        let next_id = listings.iter().map(|l| l.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(FakeState {
                listings,
                next_id,
                ..Default::default()
            }),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn stored(&self) -> Vec<Listing> {
        self.state.lock().unwrap().listings.clone()
    }

    pub fn fail_list(&self, fail: bool) {
        self.state.lock().unwrap().fail_list = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }
}

fn store_error(message: &str) -> ClientError {
    ClientError::Api {
        status: 500,
        body: format!(r#"{{"error":"{message}","code":"STORE_ERROR"}}"#),
    }
}

#[async_trait]
impl ListingsApi for FakeApi {
    async fn list(&self) -> Result<Vec<Listing>, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::List);
        if state.fail_list {
            return Err(store_error("Failed to fetch products"));
        }
        Ok(state.listings.clone())
    }

    async fn create(&self, listing: &NewListing) -> Result<Listing, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Create(listing.clone()));
        if state.fail_writes {
            return Err(store_error("Failed to create product"));
        }
        let created = Listing {
            id: state.next_id,
            title: listing.title.clone(),
            description: listing.description.clone(),
            img: listing.img.clone(),
            price: listing.price.clone(),
            category: Some(listing.category),
            listing_type: Some(listing.listing_type),
            bed: listing.bed,
        };
        state.next_id += 1;
        state.listings.insert(0, created.clone());
        Ok(created)
    }

    async fn update(&self, listing: &Listing) -> Result<Listing, ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Update(listing.clone()));
        if state.fail_writes {
            return Err(store_error("Failed to update product"));
        }
        match state.listings.iter_mut().find(|l| l.id == listing.id) {
            Some(stored) => {
                *stored = listing.clone();
                Ok(listing.clone())
            }
            None => Err(store_error("Failed to update product")),
        }
    }

    async fn delete(&self, id: DbId) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Delete(id));
        if state.fail_writes {
            return Err(store_error("Failed to delete product"));
        }
        let before = state.listings.len();
        state.listings.retain(|l| l.id != id);
        if state.listings.len() == before {
            return Err(store_error("Failed to delete product"));
        }
        Ok(())
    }
}

/// Records alerts and navigations; answers every confirm with `confirm_answer`.
pub struct RecordingUi {
    pub confirm_answer: Cell<bool>,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
}

impl RecordingUi {
    pub fn new(confirm_answer: bool) -> Self {
        Self {
            confirm_answer: Cell::new(confirm_answer),
            alerts: RefCell::default(),
            confirms: RefCell::default(),
            navigations: RefCell::default(),
        }
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Interaction for RecordingUi {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.confirm_answer.get()
    }

    fn navigate(&self, path: &str) {
        self.navigations.borrow_mut().push(path.to_string());
    }
}

pub fn listing(id: DbId, title: &str) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        description: format!("{title} description"),
        img: vec![format!("https://img.example/{id}.jpg")],
        price: "250000".to_string(),
        category: Some(ListingCategory::Sale),
        listing_type: Some(ListingType::Residential),
        bed: Some(3),
    }
}

pub fn two_listings() -> Vec<Listing> {
    vec![listing(2, "Harbor Loft"), listing(1, "Lakeview House")]
}
