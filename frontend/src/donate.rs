use yew::prelude::*;
use gloo_console::log;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use shared_data::{
	content::modal,
	donation::{MAX_AMOUNT, MIN_AMOUNT, PHONE_PATTERN},
	DonationForm,
	DonationRequest,
	Field,
	FormMsg,
	FormPhase,
	PaymentErr,
	PaymentProcessor
};

// There's no M-Pesa integration yet, so logging the request is as far as a donation gets
struct ConsoleProcessor;

impl PaymentProcessor for ConsoleProcessor {
	fn submit_donation(&self, request: &DonationRequest) -> Result<(), PaymentErr> {
		log!(request.log_line());
		Ok(())
	}
}

#[derive(Properties, PartialEq)]
pub struct DonationModalProps {
	pub open: bool,
	pub on_close: Callback<()>
}

#[function_component(DonationModal)]
pub fn donation_modal(props: &DonationModalProps) -> Html {
	let form = use_reducer_eq(DonationForm::default);

	macro_rules! input_callback{
		($type:ident) => {{
			let form_clone = form.clone();
			Callback::from(move |e: InputEvent| if let Some(msg) = e.target()
				.and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
				.map(|input| FormMsg::$type(input.value())) {
					form_clone.dispatch(msg);
				}
			)
		}}
	}

	let amount_input = input_callback!(Amount);
	let phone_input = input_callback!(Phone);

	let submit_form = form.clone();
	let submit_close = props.on_close.clone();
	let on_submit = Callback::from(move |e: SubmitEvent| {
		e.prevent_default();

		let submission = submit_form.submit(&ConsoleProcessor);

		if let Some(err) = submission.payment_failure() {
			log!(format!("Couldn't process donation: {err}"));
		}

		let accepted = submission.is_accepted();
		submit_form.dispatch(submission.into());

		if accepted {
			submit_close.emit(());
		}
	});

	// Every way of dismissing the dialog throws away whatever was typed
	let cancel_form = form.clone();
	let cancel_close = props.on_close.clone();
	let cancel = Callback::from(move |()| {
		cancel_form.dispatch(FormMsg::Reset);
		cancel_close.emit(());
	});
	let on_cancel = cancel.reform(|_: MouseEvent| ());
	let escape_cancel = cancel.clone();
	let on_keydown = Callback::from(move |e: KeyboardEvent| if e.key() == "Escape" {
		escape_cancel.emit(());
	});

	let phase = form.phase(props.open);
	if phase == FormPhase::Closed {
		return html! {};
	}

	let field_error = |field: Field| form.errors.get(field).map_or_else(
		|| html! {},
		|msg| html! { <p class="field-error">{ msg }</p> }
	);
	let input_class = |field: Field| classes!(form.errors.contains(field).then_some("invalid"));

	html! {
		<>
			<button id="donate-overlay" type="button" onclick={ on_cancel.clone() }></button>
			<div
				id="donate-dialog"
				class={ classes!((phase == FormPhase::OpenWithErrors).then_some("has-errors")) }
				role="dialog"
				aria-modal="true"
				tabindex="-1"
				onkeydown={ on_keydown }
			>
				<h2>{ modal::TITLE }</h2>
				<p>{ modal::DESCRIPTION }</p>

				// The browser's own checks would block the submit before ours could show anything
				<form id="donate-form" onsubmit={ on_submit } novalidate={ true }>
					<div>
						<label for="donate-amount">{ modal::AMOUNT_LABEL }</label>
						<input
							type="number"
							id="donate-amount"
							class={ input_class(Field::Amount) }
							value={ form.amount.clone() }
							oninput={ amount_input }
							placeholder={ modal::AMOUNT_PLACEHOLDER }
							required={ true }
							min={ MIN_AMOUNT.to_string() }
							max={ MAX_AMOUNT.to_string() }
						/>
						{ field_error(Field::Amount) }
					</div>
					<div>
						<label for="donate-phone">{ modal::PHONE_LABEL }</label>
						<input
							type="tel"
							id="donate-phone"
							class={ input_class(Field::Phone) }
							value={ form.phone.clone() }
							oninput={ phone_input }
							placeholder={ modal::PHONE_PLACEHOLDER }
							required={ true }
							pattern={ PHONE_PATTERN }
						/>
						{ field_error(Field::Phone) }
						<p class="field-hint">{ modal::PHONE_HINT }</p>
					</div>
					<div id="donate-buttons">
						<button type="submit" id="donate-submit">{ modal::SUBMIT }</button>
						<button type="button" id="donate-cancel" onclick={ on_cancel }>{ modal::CANCEL }</button>
					</div>
				</form>
			</div>
		</>
	}
}
