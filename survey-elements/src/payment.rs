//! Payment element.
//!
//! There is no checkout here: clicking the pay button marks the payment as
//! completed so the survey can proceed.

use survey_elements_types::{PaymentElement, ResponseValue};

use crate::currency::format_currency;
use crate::view::ElementProps;

/// Value stored once the respondent has paid.
pub const PAYMENT_COMPLETED: &str = "completed";

/// Label of the pay button when none is configured.
pub const DEFAULT_BUTTON_LABEL: &str = "Pay now";

/// Label of the pay button after payment.
pub const PAID_LABEL: &str = "✓ Paid";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentView {
    /// Formatted price, e.g. `"$25.00"`.
    pub price: String,
    pub button_label: String,
    pub button_disabled: bool,
}

fn is_paid(props: &ElementProps) -> bool {
    props
        .value
        .as_ref()
        .and_then(ResponseValue::as_str)
        .is_some_and(|v| v == PAYMENT_COMPLETED)
}

pub(crate) fn build_view(config: &PaymentElement, props: &ElementProps) -> PaymentView {
    let paid = is_paid(props);
    let button_label = if paid {
        PAID_LABEL.to_string()
    } else {
        config
            .button_label
            .as_ref()
            .map(|label| props.localize(label))
            .filter(|label| !label.is_empty())
            .unwrap_or_else(|| DEFAULT_BUTTON_LABEL.to_string())
    };

    PaymentView {
        price: format_currency(config.amount, &config.currency),
        button_label,
        button_disabled: paid,
    }
}

pub(crate) fn handle_pay(props: &ElementProps) -> Option<ResponseValue> {
    if is_paid(props) || props.disabled {
        return None;
    }
    Some(ResponseValue::from(PAYMENT_COMPLETED))
}
