use std::sync::Arc;

use kiosko_cart::{Cart, CartStore};
use kiosko_contact::{ContactInfo, FieldErrors, FieldId, FormSnapshot, validate, validate_form};
use kiosko_products::ProductEntry;
use kiosko_storage::{InMemoryStore, KeyValueStore, load_json, save_json};
use kiosko_summary::{render, render_html};

use crate::config::{ContactSource, SessionConfig};
use crate::error::SessionError;
use crate::notice::Notice;
use crate::prompt::Prompter;
use crate::user::{Gender, Greeting, KNOWN_USER_KEY, KnownUser};

/// Transient-store key of the confirmed contact snapshot.
pub const CONTACT_KEY: &str = "contact-info";

/// The two storage scopes a session works with.
#[derive(Clone)]
pub struct SessionStores {
    /// Survives restarts: cart and known-user token.
    pub persistent: Arc<dyn KeyValueStore>,
    /// Lives as long as the session: confirmed contact.
    pub transient: Arc<dyn KeyValueStore>,
}

impl SessionStores {
    pub fn new(persistent: Arc<dyn KeyValueStore>, transient: Arc<dyn KeyValueStore>) -> Self {
        Self {
            persistent,
            transient,
        }
    }

    /// Both scopes in memory (tests, demos).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryStore::new()), Arc::new(InMemoryStore::new()))
    }
}

/// Result of a user action: an optional notice plus the re-rendered summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub notice: Option<Notice>,
    pub summary: String,
}

pub struct SessionController {
    config: SessionConfig,
    stores: SessionStores,
    cart: CartStore,
    form: FormSnapshot,
    errors: FieldErrors,
}

impl core::fmt::Debug for SessionController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionController")
            .field("config", &self.config)
            .field("cart", &self.cart)
            .field("errors", &self.errors)
            .finish()
    }
}

impl SessionController {
    /// Start a session: load the persisted cart (corrupt data reads as empty).
    pub fn start(stores: SessionStores, config: SessionConfig) -> Self {
        let cart = CartStore::load(stores.persistent.clone());
        tracing::info!(
            items = cart.items().len(),
            contact_source = ?config.contact_source,
            "session started"
        );
        Self {
            config,
            stores,
            cart,
            form: FormSnapshot::new(),
            errors: FieldErrors::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn form(&self) -> &FormSnapshot {
        &self.form
    }

    /// Current field annotations.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// "Buy" on a product: parse its displayed price and add one unit.
    pub fn buy(&mut self, product: &ProductEntry) -> Result<Response, SessionError> {
        let price = product.price()?;
        let line = self.cart.add(&product.name, price)?;
        tracing::debug!(product = %line.name, quantity = line.quantity, "bought");
        Ok(self.respond(None))
    }

    /// Real-time feedback for one field.
    ///
    /// Records the value, drops the field's annotation, and re-attaches the
    /// registered message when a non-empty value fails validation. Unknown
    /// keys are ignored. Returns the field's current annotation.
    pub fn field_input(&mut self, key: &str, value: &str) -> Option<&'static str> {
        let field = FieldId::from_key(key)?;
        self.form.set(field, value);
        self.errors.clear(field);
        if !value.trim().is_empty() && !validate(field, value) {
            self.errors
                .set(field, kiosko_contact::pattern_for(field).message);
        }
        self.errors.get(field)
    }

    /// "Submit order". Validation failures leave every store untouched.
    pub fn submit_order(&mut self) -> Result<Response, SessionError> {
        if self.cart.is_empty() {
            return Ok(self.respond(Some(Notice::EmptyCart)));
        }

        let errors = validate_form(&self.form);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "order blocked by field errors");
            self.errors = errors;
            return Ok(self.respond(Some(Notice::FixErrors)));
        }
        self.errors.clear_all();

        let contact = self.form.to_contact();
        if self.config.keep_contact {
            save_json(self.stores.transient.as_ref(), CONTACT_KEY, &contact)?;
        }
        tracing::info!(
            items = self.cart.items().len(),
            total = %self.cart.total(),
            "order placed"
        );
        Ok(self.respond(Some(Notice::OrderPlaced)))
    }

    /// "Clear order", after user confirmation.
    pub fn clear_order(&mut self, prompter: &mut dyn Prompter) -> Result<Response, SessionError> {
        if self.cart.is_empty() && !self.cart.has_persisted_record()? {
            return Ok(self.respond(Some(Notice::NothingToClear)));
        }
        if !prompter.confirm("¿Quieres borrar TODO el carrito?") {
            return Ok(self.respond(None));
        }

        self.cart.clear()?;
        self.stores.transient.remove(CONTACT_KEY)?;
        tracing::info!("order cleared");
        Ok(self.respond(None))
    }

    pub fn greeting(&self) -> Greeting {
        match load_json::<KnownUser, _>(self.stores.persistent.as_ref(), KNOWN_USER_KEY) {
            Ok(Some(user)) => Greeting::Returning(user),
            Ok(None) => Greeting::FirstTime,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring unreadable known-user token");
                Greeting::FirstTime
            }
        }
    }

    /// Login/logout toggle: registers when anonymous, logs out otherwise.
    pub fn toggle_login(&mut self, prompter: &mut dyn Prompter) -> Result<Greeting, SessionError> {
        if self.greeting().is_known() {
            self.log_out(prompter)
        } else {
            self.register(prompter)
        }
    }

    /// Ask for a user name and gender and store the known-user token.
    /// Cancelling or an empty name leaves the session anonymous.
    pub fn register(&mut self, prompter: &mut dyn Prompter) -> Result<Greeting, SessionError> {
        let Some(name) = prompter
            .ask("Introduce tu nombre de usuario:", None)
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
        else {
            return Ok(self.greeting());
        };

        let answer = prompter
            .ask("¿Eres mujer u hombre? (f/m)", Some("f"))
            .unwrap_or_default();
        let user = KnownUser {
            name,
            gender: Gender::from_answer(&answer),
        };
        save_json(self.stores.persistent.as_ref(), KNOWN_USER_KEY, &user)?;
        tracing::info!(user = %user.name, "user registered");
        Ok(Greeting::Returning(user))
    }

    /// Remove the known-user token after confirmation and reset the view to
    /// its anonymous state (form and annotations cleared, cart re-read).
    pub fn log_out(&mut self, prompter: &mut dyn Prompter) -> Result<Greeting, SessionError> {
        if !prompter.confirm("¿Cerrar sesión?") {
            return Ok(self.greeting());
        }
        self.stores.persistent.remove(KNOWN_USER_KEY)?;
        self.form = FormSnapshot::new();
        self.errors.clear_all();
        self.cart.reload();
        tracing::info!("user logged out");
        Ok(Greeting::FirstTime)
    }

    /// Contact snapshot stored by the last successful submit.
    pub fn confirmed_contact(&self) -> Option<ContactInfo> {
        load_json(self.stores.transient.as_ref(), CONTACT_KEY).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring unreadable contact snapshot");
            None
        })
    }

    fn summary_contact(&self) -> Option<ContactInfo> {
        match self.config.contact_source {
            ContactSource::LiveForm => Some(self.form.to_contact()),
            ContactSource::Confirmed => self.confirmed_contact(),
        }
    }

    /// Plain-text order summary.
    pub fn summary(&self) -> String {
        render(self.cart.cart(), self.summary_contact().as_ref())
    }

    /// HTML fragment of the order summary.
    pub fn summary_html(&self) -> String {
        render_html(self.cart.cart(), self.summary_contact().as_ref())
    }

    fn respond(&self, notice: Option<Notice>) -> Response {
        Response {
            notice,
            summary: self.summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosko_summary::{EMPTY_CART_MESSAGE, NO_CONTACT_MESSAGE};

    struct Answers {
        confirm: bool,
        replies: Vec<Option<String>>,
    }

    impl Prompter for Answers {
        fn confirm(&mut self, _message: &str) -> bool {
            self.confirm
        }

        fn ask(&mut self, _message: &str, _default: Option<&str>) -> Option<String> {
            if self.replies.is_empty() {
                None
            } else {
                self.replies.remove(0)
            }
        }
    }

    fn yes() -> Answers {
        Answers {
            confirm: true,
            replies: vec![],
        }
    }

    fn croissant() -> ProductEntry {
        ProductEntry::new("Croissant", "1,50 €")
    }

    fn fill_valid_form(session: &mut SessionController) {
        session.field_input("name", "Lucía");
        session.field_input("lastName1", "García");
        session.field_input("phone", "+34 666 777 888");
        session.field_input("email", "lucia@example.com");
        session.field_input("address", "Calle Mayor 1");
    }

    #[test]
    fn buy_adds_and_renders() {
        let mut session = SessionController::start(SessionStores::in_memory(), SessionConfig::default());
        session.buy(&croissant()).unwrap();
        let response = session.buy(&croissant()).unwrap();

        assert_eq!(response.notice, None);
        assert!(response.summary.contains("Croissant × 2 → 3.00 €"));
        assert_eq!(session.cart().total().fixed(), "3.00");
    }

    #[test]
    fn buy_with_unparseable_price_leaves_cart_untouched() {
        let mut session = SessionController::start(SessionStores::in_memory(), SessionConfig::default());
        let err = session.buy(&ProductEntry::new("Misterio", "gratis")).unwrap_err();
        assert!(matches!(err, SessionError::Price(_)));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn buy_past_the_decimal_range_is_refused_and_summary_still_renders() {
        let stores = SessionStores::in_memory();
        let mut session = SessionController::start(stores.clone(), SessionConfig::default());
        let lingote = ProductEntry::new("Lingote", "50000000000000000000000000000 €");
        session.buy(&lingote).unwrap();

        let err = session.buy(&lingote).unwrap_err();
        assert!(matches!(err, SessionError::Cart(_)));
        assert_eq!(session.cart().items()[0].quantity, 1);
        assert!(session.summary().contains("Lingote"));

        let next = SessionController::start(stores, SessionConfig::default());
        assert_eq!(next.cart().items()[0].quantity, 1);
    }

    #[test]
    fn field_input_sets_and_clears_annotations() {
        let mut session = SessionController::start(SessionStores::in_memory(), SessionConfig::default());

        assert!(session.field_input("email", "lucia@").is_some());
        assert_eq!(session.errors().len(), 1);

        assert_eq!(session.field_input("email", "lucia@example.com"), None);
        assert!(session.errors().is_empty());

        // Empty values clear without re-validating.
        session.field_input("email", "bad");
        assert_eq!(session.field_input("email", "   "), None);
    }

    #[test]
    fn field_input_ignores_unknown_fields() {
        let mut session = SessionController::start(SessionStores::in_memory(), SessionConfig::default());
        assert_eq!(session.field_input("coupon", "???"), None);
        assert_eq!(session.form(), &FormSnapshot::new());
    }

    #[test]
    fn submit_with_empty_cart_is_rejected() {
        let mut session = SessionController::start(SessionStores::in_memory(), SessionConfig::default());
        fill_valid_form(&mut session);
        let response = session.submit_order().unwrap();
        assert_eq!(response.notice, Some(Notice::EmptyCart));
        assert_eq!(response.summary, EMPTY_CART_MESSAGE);
    }

    #[test]
    fn submit_with_invalid_email_leaves_stores_untouched() {
        let stores = SessionStores::in_memory();
        let mut session = SessionController::start(stores.clone(), SessionConfig::default());
        session.buy(&croissant()).unwrap();
        fill_valid_form(&mut session);
        session.submit_order().unwrap();

        let cart_before = stores.persistent.get(kiosko_cart::CART_KEY).unwrap();
        let contact_before = stores.transient.get(CONTACT_KEY).unwrap();

        session.field_input("email", "not-an-email");
        let response = session.submit_order().unwrap();

        assert_eq!(response.notice, Some(Notice::FixErrors));
        assert!(session.errors().get(FieldId::Email).is_some());
        assert_eq!(stores.persistent.get(kiosko_cart::CART_KEY).unwrap(), cart_before);
        assert_eq!(stores.transient.get(CONTACT_KEY).unwrap(), contact_before);
    }

    #[test]
    fn submit_reports_missing_required_fields() {
        let mut session = SessionController::start(SessionStores::in_memory(), SessionConfig::default());
        session.buy(&croissant()).unwrap();
        session.field_input("name", "Lucía");

        let response = session.submit_order().unwrap();
        assert_eq!(response.notice, Some(Notice::FixErrors));
        assert_eq!(
            session.errors().get(FieldId::Phone),
            Some(kiosko_contact::REQUIRED_MESSAGE)
        );
        assert_eq!(session.errors().get(FieldId::LastName2), None);
    }

    #[test]
    fn submit_stores_contact_when_configured() {
        let stores = SessionStores::in_memory();
        let mut session = SessionController::start(stores.clone(), SessionConfig::default());
        session.buy(&croissant()).unwrap();
        fill_valid_form(&mut session);

        let response = session.submit_order().unwrap();
        assert_eq!(response.notice, Some(Notice::OrderPlaced));
        assert_eq!(session.confirmed_contact(), Some(session.form().to_contact()));
    }

    #[test]
    fn submit_without_keeping_contact_stores_nothing() {
        let stores = SessionStores::in_memory();
        let config = SessionConfig {
            keep_contact: false,
            ..SessionConfig::default()
        };
        let mut session = SessionController::start(stores.clone(), config);
        session.buy(&croissant()).unwrap();
        fill_valid_form(&mut session);

        session.submit_order().unwrap();
        assert_eq!(stores.transient.get(CONTACT_KEY).unwrap(), None);
    }

    #[test]
    fn confirmed_source_shows_placeholder_until_submit() {
        let config = SessionConfig {
            contact_source: ContactSource::Confirmed,
            ..SessionConfig::default()
        };
        let mut session = SessionController::start(SessionStores::in_memory(), config);
        let response = session.buy(&croissant()).unwrap();
        assert_eq!(response.summary, NO_CONTACT_MESSAGE);

        fill_valid_form(&mut session);
        let response = session.submit_order().unwrap();
        assert!(response.summary.contains("Lucía García"));
    }

    #[test]
    fn clear_requires_confirmation() {
        let mut session = SessionController::start(SessionStores::in_memory(), SessionConfig::default());
        session.buy(&croissant()).unwrap();

        let mut no = Answers {
            confirm: false,
            replies: vec![],
        };
        session.clear_order(&mut no).unwrap();
        assert!(!session.cart().is_empty());

        let response = session.clear_order(&mut yes()).unwrap();
        assert_eq!(response.summary, EMPTY_CART_MESSAGE);
        assert!(session.cart().is_empty());
    }

    #[test]
    fn clear_with_nothing_reports_notice() {
        let mut session = SessionController::start(SessionStores::in_memory(), SessionConfig::default());
        let response = session.clear_order(&mut yes()).unwrap();
        assert_eq!(response.notice, Some(Notice::NothingToClear));
    }

    #[test]
    fn clear_removes_contact_snapshot() {
        let stores = SessionStores::in_memory();
        let mut session = SessionController::start(stores.clone(), SessionConfig::default());
        session.buy(&croissant()).unwrap();
        fill_valid_form(&mut session);
        session.submit_order().unwrap();

        session.clear_order(&mut yes()).unwrap();
        assert_eq!(stores.transient.get(CONTACT_KEY).unwrap(), None);
        assert_eq!(session.confirmed_contact(), None);
    }

    #[test]
    fn register_then_log_out() {
        let stores = SessionStores::in_memory();
        let mut session = SessionController::start(stores.clone(), SessionConfig::default());
        assert_eq!(session.greeting(), Greeting::FirstTime);

        let mut prompter = Answers {
            confirm: true,
            replies: vec![Some("Lucía".into()), Some("f".into())],
        };
        let greeting = session.toggle_login(&mut prompter).unwrap();
        assert_eq!(greeting.message(), "¡Bienvenida Lucía! ¿Qué te apetece hoy?");
        assert!(session.greeting().is_known());

        let greeting = session.toggle_login(&mut prompter).unwrap();
        assert_eq!(greeting, Greeting::FirstTime);
        assert_eq!(stores.persistent.get(KNOWN_USER_KEY).unwrap(), None);
    }

    #[test]
    fn cancelled_registration_stays_anonymous() {
        let mut session = SessionController::start(SessionStores::in_memory(), SessionConfig::default());
        let mut prompter = Answers {
            confirm: true,
            replies: vec![Some("   ".into())],
        };
        assert_eq!(session.register(&mut prompter).unwrap(), Greeting::FirstTime);
    }

    #[test]
    fn malformed_known_user_reads_as_anonymous() {
        let stores = SessionStores::in_memory();
        stores.persistent.set(KNOWN_USER_KEY, "\"bare-username\"").unwrap();
        let session = SessionController::start(stores, SessionConfig::default());
        assert_eq!(session.greeting(), Greeting::FirstTime);
    }
}
