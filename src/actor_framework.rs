use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Payloads, and Actions)
// =============================================================================

/// Trait that any record type must implement to be held by a [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from its ID, the actor's creation sequence
    /// number (1 for the first record) and the payload.
    fn from_create(id: Self::Id, sequence: u64, payload: Self::CreatePayload) -> Result<Self, String>;

    /// Key that must be unique across all records of this type.
    ///
    /// Checked on create only, so the key must not change afterwards.
    fn unique_key(&self) -> Option<&str> { None }

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;

    // --- Action Handler ---

    /// Handle a domain-specific state change
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Failures surfaced by [`ResourceClient`] calls.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    AlreadyExists(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Record filter evaluated inside the actor, so only matches are cloned.
pub struct Predicate<T>(pub Box<dyn Fn(&T) -> bool + Send + Sync>);

impl<T> Predicate<T> {
    pub fn matches(&self, item: &T) -> bool {
        (self.0)(item)
    }
}

impl<T> Debug for Predicate<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Predicate(..)")
    }
}

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Filter {
        predicate: Predicate<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns every record of one entity type and serves requests one at a time.
///
/// Records are keyed by creation sequence so `List` returns them in
/// insertion order.
pub struct ResourceActor<T: Entity> {
    name: &'static str,
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    records: BTreeMap<u64, T>,
    index: HashMap<T::Id, u64>,
    unique_keys: HashSet<String>,
    sequence: u64,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        name: &'static str,
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            name,
            receiver,
            records: BTreeMap::new(),
            index: HashMap::new(),
            unique_keys: HashSet::new(),
            sequence: 0,
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    pub async fn run(mut self) {
        info!(actor = self.name, "ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.handle_create(payload));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.index.get(&id).and_then(|seq| self.records.get(seq)).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.records.values().cloned().collect()));
                }
                ResourceRequest::Filter { predicate, respond_to } => {
                    let matched = self.records.values().filter(|item| predicate.matches(item)).cloned().collect();
                    let _ = respond_to.send(Ok(matched));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let result = match self.get_mut(&id) {
                        Some(item) => item
                            .on_update(patch)
                            .map(|_| item.clone())
                            .map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.get_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!(actor = self.name, records = self.records.len(), "ResourceActor stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let sequence = self.sequence + 1;
        let mut item = T::from_create(id.clone(), sequence, payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;

        if let Some(key) = item.unique_key() {
            if self.unique_keys.contains(key) {
                warn!(actor = self.name, key, "Duplicate unique key rejected");
                return Err(FrameworkError::AlreadyExists(key.to_string()));
            }
            self.unique_keys.insert(key.to_string());
        }

        self.sequence = sequence;
        self.index.insert(id.clone(), sequence);
        self.records.insert(sequence, item.clone());
        debug!(actor = self.name, id = %item.id(), sequence, "Record created");
        Ok(item)
    }

    fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        let seq = self.index.get(id)?;
        self.records.get_mut(seq)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(request(respond_to))
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { payload, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::List { respond_to }).await
    }

    /// Records matching `predicate`, in insertion order.
    pub async fn list_where(
        &self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T>, FrameworkError> {
        let predicate = Predicate(Box::new(predicate));
        self.call(|respond_to| ResourceRequest::Filter { predicate, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: String,
        code: String,
        label: String,
        sequence: u64,
        closed: bool,
    }

    #[derive(Debug)]
    struct TicketCreate {
        code: String,
        label: String,
    }

    #[derive(Debug)]
    struct TicketPatch {
        label: Option<String>,
    }

    #[derive(Debug)]
    enum TicketAction {
        Close,
    }

    impl Entity for Ticket {
        type Id = String;
        type CreatePayload = TicketCreate;
        type Patch = TicketPatch;
        type Action = TicketAction;
        type ActionResult = bool;

        fn id(&self) -> &String { &self.id }

        fn from_create(id: String, sequence: u64, payload: TicketCreate) -> Result<Self, String> {
            Ok(Self { id, code: payload.code, label: payload.label, sequence, closed: false })
        }

        fn unique_key(&self) -> Option<&str> { Some(&self.code) }

        fn on_create(&mut self) -> Result<(), String> {
            if self.label.is_empty() {
                return Err("label required".to_string());
            }
            Ok(())
        }

        fn on_update(&mut self, patch: TicketPatch) -> Result<(), String> {
            if let Some(label) = patch.label {
                self.label = label;
            }
            Ok(())
        }

        fn handle_action(&mut self, action: TicketAction) -> Result<bool, String> {
            match action {
                TicketAction::Close if self.closed => Ok(false),
                TicketAction::Close => {
                    self.closed = true;
                    Ok(true)
                }
            }
        }
    }

    fn spawn_tickets() -> ResourceClient<Ticket> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("ticket_{}", counter.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new("tickets", 10, next_id);
        tokio::spawn(actor.run());
        client
    }

    fn ticket(code: &str, label: &str) -> TicketCreate {
        TicketCreate { code: code.into(), label: label.into() }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_sequences() {
        let client = spawn_tickets();

        let first = client.create(ticket("a", "first")).await.unwrap();
        let second = client.create(ticket("b", "second")).await.unwrap();

        assert_eq!(first.id, "ticket_1");
        assert_eq!(first.sequence, 1);
        assert_eq!(second.sequence, 2);
        assert_eq!(client.get("ticket_2".into()).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let client = spawn_tickets();
        for code in ["c", "a", "b"] {
            client.create(ticket(code, "x")).await.unwrap();
        }

        let codes: Vec<String> = client.list().await.unwrap().into_iter().map(|t| t.code).collect();
        assert_eq!(codes, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_list_where_returns_only_matches() {
        let client = spawn_tickets();
        for (code, label) in [("a", "keep"), ("b", "drop"), ("c", "keep")] {
            client.create(ticket(code, label)).await.unwrap();
        }

        let kept = client.list_where(|t: &Ticket| t.label == "keep").await.unwrap();
        let codes: Vec<&str> = kept.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes, vec!["a", "c"]);

        assert!(client.list_where(|t: &Ticket| t.closed).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unique_key_and_hook_rejections() {
        let client = spawn_tickets();
        client.create(ticket("dup", "one")).await.unwrap();

        let err = client.create(ticket("dup", "two")).await.unwrap_err();
        assert_eq!(err, FrameworkError::AlreadyExists("dup".into()));

        let err = client.create(ticket("other", "")).await.unwrap_err();
        assert_eq!(err, FrameworkError::Rejected("label required".into()));

        // Rejected creates do not consume a sequence number.
        let next = client.create(ticket("third", "ok")).await.unwrap();
        assert_eq!(next.sequence, 2);
    }

    #[tokio::test]
    async fn test_update_and_action() {
        let client = spawn_tickets();
        let created = client.create(ticket("a", "before")).await.unwrap();

        let updated = client.update(created.id.clone(), TicketPatch { label: Some("after".into()) }).await.unwrap();
        assert_eq!(updated.label, "after");

        assert!(client.perform_action(created.id.clone(), TicketAction::Close).await.unwrap());
        assert!(!client.perform_action(created.id.clone(), TicketAction::Close).await.unwrap());

        let err = client.update("missing".into(), TicketPatch { label: None }).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("missing".into()));
        let err = client.perform_action("missing".into(), TicketAction::Close).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("missing".into()));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Ticket>::new("tickets", 1, || "id".to_string());
        drop(actor);

        assert_eq!(client.list().await.unwrap_err(), FrameworkError::ActorClosed);
    }
}
