use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Event, Response, ResponseCompositeKey};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub events: Arc<Mutex<HashMap<String, Event>>>,
        pub responses: Arc<Mutex<HashMap<ResponseCompositeKey, Response>>>,
    }
);
