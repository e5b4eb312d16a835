use serde::Serialize;
use std::{
	cell::RefCell,
	collections::BTreeMap,
	fmt
};

pub const MIN_AMOUNT: f64 = 10.0;
pub const MAX_AMOUNT: f64 = 70_000.0;

pub const MIN_AMOUNT_MSG: &str = "Minimum donation is KES 10";
pub const MAX_AMOUNT_MSG: &str = "Maximum donation is KES 70,000";
pub const PHONE_MSG: &str = "Please enter a valid Safaricom number (format: 254XXXXXXXXX)";

// Same shape as the check in `is_safaricom_number`, but for the browser's own validation
pub const PHONE_PATTERN: &str = "^254[7][0-9]{8}$";

const COUNTRY_CODE: &str = "254";
const SAFARICOM_PREFIX: u8 = b'7';
const SUBSCRIBER_DIGITS: usize = 8;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Field {
	Amount,
	Phone
}

impl Field {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Amount => "amount",
			Self::Phone => "phone"
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Per-field error messages. A field with no entry is valid.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn get(&self, field: Field) -> Option<&str> {
		self.0.get(&field).map(String::as_str)
	}

	#[must_use]
	pub fn contains(&self, field: Field) -> bool {
		self.0.contains_key(&field)
	}

	pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
		self.0.keys().copied()
	}

	fn insert(&mut self, field: Field, msg: &str) {
		self.0.insert(field, msg.to_string());
	}
}

/// Checks both fields independently, so a bad amount never hides a bad phone number (or the other
/// way around).
#[must_use]
pub fn validate(amount: f64, phone: &str) -> ValidationErrors {
	let mut errors = ValidationErrors::default();

	// NaN compares false against everything, so it has to be caught explicitly or it'd sail
	// through both range checks
	if amount.is_nan() || amount < MIN_AMOUNT {
		errors.insert(Field::Amount, MIN_AMOUNT_MSG);
	} else if amount > MAX_AMOUNT {
		errors.insert(Field::Amount, MAX_AMOUNT_MSG);
	}

	if !is_safaricom_number(phone) {
		errors.insert(Field::Phone, PHONE_MSG);
	}

	errors
}

/// `254`, then `7`, then exactly 8 more digits. Nothing else, not even surrounding whitespace.
#[must_use]
pub fn is_safaricom_number(phone: &str) -> bool {
	let Some(rest) = phone.strip_prefix(COUNTRY_CODE) else {
		return false;
	};

	match rest.as_bytes() {
		[prefix, subscriber @ ..] => *prefix == SAFARICOM_PREFIX
			&& subscriber.len() == SUBSCRIBER_DIGITS
			&& subscriber.iter().all(u8::is_ascii_digit),
		[] => false
	}
}

/// Turns whatever is in the amount input into a number the same way a browser number input would
/// coerce it: empty means 0, garbage means NaN (and both of those fail validation). Anything too
/// big for an f64 comes out as infinity, which is over the maximum like any other huge amount.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
	let text = text.trim();

	if text.is_empty() {
		return 0.0;
	}

	text.parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DonationRequest {
	pub amount: f64,
	pub phone: String
}

impl DonationRequest {
	/// The phone number in E.164 form, which is what a mobile-money API would want
	#[must_use]
	pub fn phone_e164(&self) -> String {
		format!("+{}", self.phone)
	}

	/// What gets logged when a request is handed off, with the request itself as JSON
	#[must_use]
	pub fn log_line(&self) -> String {
		serde_json::to_string(self).map_or_else(
			|e| format!("Processing donation (couldn't serialize it: {e}): {self:?}"),
			|json| format!("Processing donation: {json}")
		)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentErr {
	Unavailable(String),
	Declined(String)
}

impl fmt::Display for PaymentErr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unavailable(why) => write!(f, "Payment service unavailable: {why}"),
			Self::Declined(why) => write!(f, "Payment was declined: {why}")
		}
	}
}

impl std::error::Error for PaymentErr {}

/// Whatever actually moves the money. Only ever handed requests that passed validation.
pub trait PaymentProcessor {
	fn submit_donation(&self, request: &DonationRequest) -> Result<(), PaymentErr>;
}

/// Stand-in processor that just keeps everything it was given
#[derive(Default, Debug)]
pub struct RecordingProcessor {
	requests: RefCell<Vec<DonationRequest>>
}

impl RecordingProcessor {
	#[must_use]
	pub fn requests(&self) -> Vec<DonationRequest> {
		self.requests.borrow().clone()
	}
}

impl PaymentProcessor for RecordingProcessor {
	fn submit_donation(&self, request: &DonationRequest) -> Result<(), PaymentErr> {
		self.requests.borrow_mut().push(request.clone());
		Ok(())
	}
}

#[derive(Debug)]
pub enum FormMsg {
	Amount(String),
	Phone(String),
	Errors(ValidationErrors),
	Reset
}

/// What the donation modal is holding while it's open. Dropped (well, reset) on submit or cancel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonationForm {
	pub amount: String,
	pub phone: String,
	pub errors: ValidationErrors
}

#[derive(Debug)]
pub enum Submission {
	Rejected(ValidationErrors),
	Accepted(DonationRequest, Result<(), PaymentErr>)
}

impl Submission {
	#[must_use]
	pub fn is_accepted(&self) -> bool {
		matches!(self, Self::Accepted(..))
	}

	/// The request made it past validation but the processor couldn't take it
	#[must_use]
	pub fn payment_failure(&self) -> Option<&PaymentErr> {
		match self {
			Self::Accepted(_, Err(err)) => Some(err),
			_ => None
		}
	}
}

impl From<Submission> for FormMsg {
	fn from(sub: Submission) -> Self {
		match sub {
			Submission::Rejected(errors) => Self::Errors(errors),
			// whether or not the payment went through, the request has left the form
			Submission::Accepted(..) => Self::Reset
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
	Closed,
	OpenClean,
	OpenWithErrors
}

impl DonationForm {
	pub fn apply(&mut self, msg: FormMsg) {
		match msg {
			// editing a field leaves errors alone; they only change on the next submit
			FormMsg::Amount(amount) => self.amount = amount,
			FormMsg::Phone(phone) => self.phone = phone,
			FormMsg::Errors(errors) => self.errors = errors,
			FormMsg::Reset => *self = Self::default()
		}
	}

	#[must_use]
	pub fn request(&self) -> DonationRequest {
		DonationRequest {
			amount: parse_amount(&self.amount),
			phone: self.phone.clone()
		}
	}

	#[must_use]
	pub fn check(&self) -> Result<DonationRequest, ValidationErrors> {
		let request = self.request();
		let errors = validate(request.amount, &request.phone);

		if errors.is_empty() {
			Ok(request)
		} else {
			Err(errors)
		}
	}

	/// Validates and, only if nothing is wrong, hands the request off to `processor`. Doesn't
	/// touch `self`; apply the returned `Submission` (via `FormMsg::from`) to update the form.
	pub fn submit<P: PaymentProcessor + ?Sized>(&self, processor: &P) -> Submission {
		match self.check() {
			Err(errors) => Submission::Rejected(errors),
			Ok(request) => {
				let res = processor.submit_donation(&request);
				Submission::Accepted(request, res)
			}
		}
	}

	#[must_use]
	pub fn phase(&self, open: bool) -> FormPhase {
		match (open, self.errors.is_empty()) {
			(false, _) => FormPhase::Closed,
			(true, true) => FormPhase::OpenClean,
			(true, false) => FormPhase::OpenWithErrors
		}
	}
}

#[cfg(feature = "yew")]
impl yew::Reducible for DonationForm {
	type Action = FormMsg;

	fn reduce(self: std::rc::Rc<Self>, action: Self::Action) -> std::rc::Rc<Self> {
		let mut next = (*self).clone();
		next.apply(action);
		next.into()
	}
}
