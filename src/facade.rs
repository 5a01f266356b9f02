//! The Facade pattern: one simple entry point in front of a multi-step
//! subsystem.
//!
//! Starting the email provider really means opening a connection, acquiring
//! a token and initializing a session, in that order. Callers see none of
//! that: [`EmailProviderFacade::start`] runs the whole sequence, lazily
//! building the sub-resources on first use and reusing them afterwards.

/// Low-level connection subsystem.
pub struct Connection;

impl Connection {
    pub fn open(&self) -> &'static str {
        log::info!("opening connection");
        "connection opened"
    }

    pub fn token(&self) -> &'static str {
        log::info!("acquiring connection token");
        "token acquired"
    }
}

/// Low-level session subsystem, unrelated to the connection.
pub struct Session;

impl Session {
    pub fn init(&self) -> &'static str {
        log::info!("initializing session");
        "session initialized"
    }
}

#[derive(Default)]
pub struct EmailProviderFacade {
    connection: Option<Connection>,
    session: Option<Session>,
    connections_built: usize,
    sessions_built: usize,
}

impl EmailProviderFacade {
    pub fn new() -> Self {
        EmailProviderFacade::default()
    }

    /// Runs the full startup sequence and returns the steps performed, in
    /// order. Sub-resources are built on the first call and reused on later
    /// ones.
    pub fn start(&mut self) -> Vec<&'static str> {
        let built = &mut self.connections_built;
        let connection = self.connection.get_or_insert_with(|| {
            *built += 1;
            Connection
        });
        let mut steps = vec![connection.open(), connection.token()];

        let built = &mut self.sessions_built;
        let session = self.session.get_or_insert_with(|| {
            *built += 1;
            Session
        });
        steps.push(session.init());

        steps.push("email provider started");
        steps
    }

    /// How many times each sub-resource has been constructed.
    pub fn resources_built(&self) -> (usize, usize) {
        (self.connections_built, self.sessions_built)
    }
}
