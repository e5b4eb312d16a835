pub mod content;
pub mod donation;

pub use donation::{
	validate,
	DonationForm,
	DonationRequest,
	Field,
	FormMsg,
	FormPhase,
	PaymentErr,
	PaymentProcessor,
	RecordingProcessor,
	Submission,
	ValidationErrors
};

pub static BASE_STYLE: &str = r#"
* {
	--green-400: #4ade80;
	--green-500: #22c55e;
	--green-600: #16a34a;
	--green-700: #15803d;
	--green-800: #166534;
	--green-900: #14532d;
	--gray-50: #f9fafb;
	--gray-100: #f3f4f6;
	--gray-200: #e5e7eb;
	--gray-300: #d1d5db;
	--gray-500: #6b7280;
	--gray-600: #4b5563;
	--gray-700: #374151;
	--gray-800: #1f2937;
	--red-500: #ef4444;
	--red-600: #dc2626;
	box-sizing: border-box;
	font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}
body {
	margin: 0;
}
button {
	cursor: pointer;
	border: none;
	font-weight: 700;
	transition: background-color 0.15s linear;
}
h2.section-title {
	font-size: 36px;
	text-align: center;
	margin: 0 0 48px 0;
	color: var(--gray-800);
}
"#;

pub static PAGE_STYLE: &str = r#"
#page {
	min-height: 100vh;
	background-image: linear-gradient(to bottom, var(--green-800), var(--green-900));
}
#hero {
	position: relative;
	height: 100vh;
	display: flex;
	align-items: center;
	justify-content: center;
	color: white;
}
#hero-shade {
	position: absolute;
	inset: 0;
	background-color: rgba(0, 0, 0, 0.5);
}
#hero-content {
	position: relative;
	z-index: 10;
	text-align: center;
	padding: 0 16px;
}
#hero-content h1 {
	font-size: 60px;
	margin: 0 0 16px 0;
}
#hero-content p {
	font-size: 24px;
	margin: 0 0 32px 0;
}
.pill {
	padding: 12px 32px;
	border-radius: 9999px;
	margin: 0 8px;
	font-size: 16px;
}
.pill.primary {
	background-color: var(--green-600);
	color: white;
}
.pill.primary:hover {
	background-color: var(--green-700);
}
.pill.secondary {
	background-color: white;
	color: var(--green-800);
}
.pill.secondary:hover {
	background-color: var(--gray-100);
}
#features {
	padding: 80px 16px;
	background-color: white;
}
#feature-grid {
	max-width: 1152px;
	margin: 0 auto;
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
	gap: 32px;
}
.feature {
	background-color: var(--gray-50);
	padding: 32px;
	border-radius: 8px;
	text-align: center;
}
.feature-icon {
	font-size: 36px;
	margin-bottom: 16px;
}
.feature h3 {
	font-size: 20px;
	margin: 0 0 8px 0;
}
.feature p {
	color: var(--gray-600);
	margin: 0;
}
#timeline {
	padding: 80px 16px;
	background-color: var(--gray-100);
}
#milestones {
	max-width: 896px;
	margin: 0 auto;
	display: flex;
	flex-direction: column;
	gap: 32px;
}
.milestone {
	display: flex;
	align-items: center;
	gap: 16px;
}
.milestone-when {
	width: 96px;
	text-align: right;
	font-weight: 700;
}
.milestone-dot {
	width: 16px;
	height: 16px;
	border-radius: 9999px;
	background-color: var(--green-600);
}
.milestone-label {
	flex: 1;
	background-color: white;
	padding: 16px;
	border-radius: 8px;
	box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}
footer {
	background-color: var(--green-900);
	color: white;
	padding: 32px 16px;
	text-align: center;
}
footer p {
	margin: 0 0 16px 0;
}
#socials {
	display: flex;
	justify-content: center;
	gap: 16px;
}
#socials a {
	color: white;
	text-decoration: none;
}
#socials a:hover {
	color: var(--green-400);
}
"#;

pub static MODAL_STYLE: &str = r#"
#donate-overlay {
	position: fixed;
	inset: 0;
	background-color: rgba(0, 0, 0, 0.6);
	z-index: 40;
	border: none;
	padding: 0;
	cursor: default;
}
#donate-dialog {
	position: fixed;
	top: 50%;
	left: 50%;
	transform: translate(-50%, -50%);
	width: 90vw;
	max-width: 384px;
	border-radius: 8px;
	background-color: white;
	padding: 24px;
	box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
	z-index: 50;
}
#donate-dialog.has-errors {
	box-shadow: 0 25px 50px -12px rgba(220, 38, 38, 0.35);
}
#donate-dialog:focus {
	outline: none;
}
#donate-dialog h2 {
	font-size: 24px;
	margin: 0 0 16px 0;
	color: var(--green-800);
}
#donate-dialog > p {
	color: var(--gray-600);
	margin: 0 0 24px 0;
}
#donate-form > div {
	margin-bottom: 16px;
}
#donate-form label {
	display: block;
	font-size: 14px;
	font-weight: 500;
	color: var(--gray-700);
}
#donate-form input {
	display: block;
	width: 100%;
	margin-top: 4px;
	padding: 8px 12px;
	border-radius: 6px;
	border: 1px solid var(--gray-300);
}
#donate-form input:focus {
	outline: none;
	border-color: var(--green-500);
}
#donate-form input.invalid {
	border-color: var(--red-500);
}
.field-error {
	margin: 4px 0 0 0;
	font-size: 14px;
	color: var(--red-600);
}
.field-hint {
	margin: 4px 0 0 0;
	font-size: 12px;
	color: var(--gray-500);
}
#donate-buttons {
	display: flex;
	gap: 16px;
	margin-top: 24px;
}
#donate-buttons button {
	flex: 1;
	padding: 8px 0;
	border-radius: 6px;
	font-weight: 500;
}
#donate-submit {
	background-color: var(--green-600);
	color: white;
}
#donate-submit:hover {
	background-color: var(--green-700);
}
#donate-cancel {
	background-color: var(--gray-200);
	color: var(--gray-800);
}
#donate-cancel:hover {
	background-color: var(--gray-300);
}
"#;
