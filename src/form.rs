//! Curation Edit Form State
//!
//! UI-free state machine behind the edit page:
//! `Loading -> Failed | Ready`, `Ready -> Submitting -> Ready | Navigated`.
//!
//! Every network round trip hands out a ticket tagged with the load
//! generation it belongs to. Results carrying an outdated ticket are dropped,
//! so a slow response for a previous record can never overwrite the current one.

use reactive_stores::Store;

use crate::error::{ApiError, ValidationError, LOAD_FAILED, UPDATE_FAILED};
use crate::models::{is_blank, CurationRecord, CurationUpdateRequest};
use crate::routes;

/// Growable list of text inputs (links or tags)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldList(Vec<String>);

impl Default for FieldList {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl FieldList {
    /// A single blank row
    pub fn placeholder() -> Self {
        Self(vec![String::new()])
    }

    /// Wrap loaded values; an empty source still gets one blank row
    pub fn from_values(values: Vec<String>) -> Self {
        if values.is_empty() {
            Self::placeholder()
        } else {
            Self(values)
        }
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn append(&mut self) {
        self.0.push(String::new());
    }

    /// Remove one row. May leave the list empty.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.0.len() {
            self.0.remove(index);
            true
        } else {
            false
        }
    }

    pub fn update(&mut self, index: usize, value: String) -> bool {
        match self.0.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Apply an edit; false if the index was out of range
    pub fn apply(&mut self, edit: ListEdit) -> bool {
        match edit {
            ListEdit::Append => {
                self.append();
                true
            }
            ListEdit::Remove(index) => self.remove(index),
            ListEdit::Update(index, value) => self.update(index, value),
        }
    }
}

/// One user edit on a `FieldList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEdit {
    Append,
    Remove(usize),
    Update(usize, String),
}

/// Page-level state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Loading,
    /// Initial load failed; terminal for this record
    Failed(String),
    Ready,
    Submitting,
    /// Update accepted; holds the detail path to go to
    Navigated(String),
}

/// Issued by `begin_load`, redeemed by `apply_load`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub id: String,
    generation: u64,
}

/// Issued by `prepare_submit`, redeemed by `apply_submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub id: String,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed(String),
    /// Response for a superseded load; state untouched
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Navigate(String),
    Failed(String),
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// Not loaded yet, load failed, or a submit is already in flight
    NotReady,
    Invalid(ValidationError),
}

/// Local, editable copy of one curation
#[derive(Clone, Debug, Default, Store)]
pub struct EditFormState {
    pub record_id: String,
    pub title: String,
    pub content: String,
    pub links: FieldList,
    pub tags: FieldList,
    pub phase: Phase,
    generation: u64,
}

impl EditFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    /// Start loading `id`, invalidating anything still in flight
    pub fn begin_load(&mut self, id: &str) -> LoadTicket {
        self.generation += 1;
        self.record_id = id.to_string();
        self.title.clear();
        self.content.clear();
        self.links = FieldList::placeholder();
        self.tags = FieldList::placeholder();
        self.phase = Phase::Loading;
        LoadTicket {
            id: self.record_id.clone(),
            generation: self.generation,
        }
    }

    pub fn apply_load(
        &mut self,
        ticket: &LoadTicket,
        result: Result<CurationRecord, ApiError>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation || !self.is_loading() {
            return LoadOutcome::Stale;
        }
        match result {
            Ok(record) => {
                self.title = record.title;
                self.content = record.content;
                self.links = FieldList::from_values(record.urls.into_iter().map(|l| l.url).collect());
                self.tags = FieldList::from_values(record.tags.into_iter().map(|t| t.name).collect());
                self.phase = Phase::Ready;
                LoadOutcome::Applied
            }
            Err(err) => {
                let message = err.user_message(LOAD_FAILED);
                self.phase = Phase::Failed(message.clone());
                LoadOutcome::Failed(message)
            }
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.title) {
            return Err(ValidationError::MissingTitle);
        }
        if is_blank(&self.content) {
            return Err(ValidationError::MissingContent);
        }
        Ok(())
    }

    /// Validate and enter `Submitting`, returning the request to send
    pub fn prepare_submit(&mut self) -> Result<(SubmitTicket, CurationUpdateRequest), SubmitRejection> {
        if self.phase != Phase::Ready {
            return Err(SubmitRejection::NotReady);
        }
        self.validate().map_err(SubmitRejection::Invalid)?;

        let request = CurationUpdateRequest::new(
            &self.title,
            &self.content,
            self.links.values(),
            self.tags.values(),
        );
        self.phase = Phase::Submitting;
        let ticket = SubmitTicket {
            id: self.record_id.clone(),
            generation: self.generation,
        };
        Ok((ticket, request))
    }

    pub fn apply_submit(&mut self, ticket: &SubmitTicket, result: Result<(), ApiError>) -> SubmitOutcome {
        if ticket.generation != self.generation || !self.is_submitting() {
            return SubmitOutcome::Stale;
        }
        match result {
            Ok(()) => {
                let path = routes::detail_path(&ticket.id);
                self.phase = Phase::Navigated(path.clone());
                SubmitOutcome::Navigate(path)
            }
            Err(err) => {
                self.phase = Phase::Ready;
                SubmitOutcome::Failed(err.user_message(UPDATE_FAILED))
            }
        }
    }
}
