use crate::config::{parse_iso_date, FieldOverride};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::{Dummy, Fake};
use rand::{Rng, RngCore};
use serde_json::{json, Value};
use tracing::{trace, warn};

const DEFAULT_AMOUNT_MAX: f64 = 10_000.0;
const DEFAULT_NUMBER_MAX: f64 = 100.0;
const DATE_WINDOW_MILLIS: i64 = 365 * 24 * 60 * 60 * 1000;

/// Everything a rule may look at when choosing and producing a value.
pub struct FieldContext<'a> {
    pub field_name: &'a str,
    /// Case-folded field name, matched by the name heuristics
    pub lower_name: String,
    /// Base type name, already stripped of the `[]` array suffix
    pub type_name: &'a str,
    pub field_override: &'a FieldOverride,
}

impl<'a> FieldContext<'a> {
    pub fn new(field_name: &'a str, type_name: &'a str, field_override: &'a FieldOverride) -> Self {
        Self {
            field_name,
            lower_name: field_name.to_lowercase(),
            type_name,
            field_override,
        }
    }

    fn name_contains(&self, needle: &str) -> bool {
        self.lower_name.contains(needle)
    }
}

/// One step of the value selection chain.
pub struct ValueRule {
    pub name: &'static str,
    pub matches: fn(&FieldContext<'_>) -> bool,
    pub generate: fn(&FieldContext<'_>, &mut dyn RngCore) -> Value,
}

/// Value selection chain, evaluated in order; the first matching rule wins.
///
/// Caller overrides come first, then field-name heuristics, then the scalar
/// type, and finally `null` for anything else.
pub static VALUE_RULES: &[ValueRule] = &[
    ValueRule { name: "override", matches: has_override, generate: from_override },
    // Name heuristics
    ValueRule { name: "email", matches: name_has_email, generate: email },
    ValueRule { name: "name", matches: name_has_name, generate: full_name },
    ValueRule { name: "date", matches: name_has_date, generate: date },
    ValueRule { name: "phone", matches: name_has_phone, generate: phone },
    ValueRule { name: "id", matches: name_has_id, generate: uuid_v4 },
    ValueRule { name: "amount", matches: name_has_amount, generate: amount },
    // Scalar types
    ValueRule { name: "String", matches: is_string, generate: lorem },
    ValueRule { name: "Int", matches: is_int, generate: int },
    ValueRule { name: "Float", matches: is_float, generate: float },
    ValueRule { name: "Boolean", matches: is_boolean, generate: boolean },
    ValueRule { name: "ID", matches: is_id, generate: uuid_v4 },
    // Object-typed and unknown fields are not synthesized; recursive
    // object generation would replace this rule.
    ValueRule { name: "null", matches: always, generate: null },
];

/// Produce one synthetic value for a field.
pub fn generate_value(
    field_name: &str,
    type_name: &str,
    field_override: &FieldOverride,
    rng: &mut dyn RngCore,
) -> Value {
    let ctx = FieldContext::new(field_name, type_name, field_override);
    let rule = matching_rule(&ctx);
    trace!(field = field_name, type_name, rule = rule.name, "Generating value");
    (rule.generate)(&ctx, rng)
}

/// The rule that would produce the value for `ctx`.
pub fn matching_rule(ctx: &FieldContext<'_>) -> &'static ValueRule {
    VALUE_RULES
        .iter()
        .find(|rule| (rule.matches)(ctx))
        .unwrap_or(&VALUE_RULES[VALUE_RULES.len() - 1])
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn has_override(ctx: &FieldContext<'_>) -> bool {
    ctx.field_override.value.is_some()
}

fn name_has_email(ctx: &FieldContext<'_>) -> bool {
    ctx.name_contains("email")
}

fn name_has_name(ctx: &FieldContext<'_>) -> bool {
    ctx.name_contains("name")
}

fn name_has_date(ctx: &FieldContext<'_>) -> bool {
    ctx.name_contains("date")
}

fn name_has_phone(ctx: &FieldContext<'_>) -> bool {
    ctx.name_contains("phone")
}

fn name_has_id(ctx: &FieldContext<'_>) -> bool {
    ctx.name_contains("id")
}

fn name_has_amount(ctx: &FieldContext<'_>) -> bool {
    ["amount", "value", "price"]
        .iter()
        .any(|needle| ctx.name_contains(needle))
}

fn is_string(ctx: &FieldContext<'_>) -> bool {
    ctx.type_name == "String"
}

fn is_int(ctx: &FieldContext<'_>) -> bool {
    ctx.type_name == "Int"
}

fn is_float(ctx: &FieldContext<'_>) -> bool {
    ctx.type_name == "Float"
}

fn is_boolean(ctx: &FieldContext<'_>) -> bool {
    ctx.type_name == "Boolean"
}

fn is_id(ctx: &FieldContext<'_>) -> bool {
    ctx.type_name == "ID"
}

fn always(_: &FieldContext<'_>) -> bool {
    true
}

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn from_override(ctx: &FieldContext<'_>, _rng: &mut dyn RngCore) -> Value {
    ctx.field_override
        .value
        .as_ref()
        .map(|value| value.resolve())
        .unwrap_or(Value::Null)
}

fn email(_ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> Value {
    json!(fake_string(SafeEmail(), rng))
}

fn full_name(_ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> Value {
    json!(fake_string(Name(), rng))
}

fn phone(_ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> Value {
    json!(fake_string(PhoneNumber(), rng))
}

fn lorem(_ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> Value {
    let mut rng = rng;
    let words: Vec<String> = Words(3..4).fake_with_rng(&mut rng);
    json!(words.join(" "))
}

fn uuid_v4(_ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> Value {
    let bytes: [u8; 16] = rng.gen();
    json!(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
}

fn date(ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> Value {
    let now = Utc::now();
    let min = date_bound(ctx, "minDate", ctx.field_override.min_date.as_deref())
        .unwrap_or_else(|| now - Duration::milliseconds(rng.gen_range(1..=DATE_WINDOW_MILLIS)));
    let max = date_bound(ctx, "maxDate", ctx.field_override.max_date.as_deref())
        .unwrap_or_else(|| now + Duration::milliseconds(rng.gen_range(1..=DATE_WINDOW_MILLIS)));

    let picked = if min >= max {
        min
    } else {
        let offset = rng.gen_range(0..=(max - min).num_milliseconds());
        min + Duration::milliseconds(offset)
    };
    json!(picked.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn amount(ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> Value {
    let (min, max) = numeric_bounds(ctx.field_override, DEFAULT_AMOUNT_MAX);
    json!(float_between(min, max, rng))
}

/// Bounds are rounded inward. A range holding no integer, e.g. `0.5..=0.7`,
/// rounds to an inverted pair and yields `ceil(min)`, which lies above `max`.
fn int(ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> Value {
    let (min, max) = numeric_bounds(ctx.field_override, DEFAULT_NUMBER_MAX);
    let (min, max) = (min.ceil() as i64, max.floor() as i64);
    let value = if min >= max { min } else { rng.gen_range(min..=max) };
    json!(value)
}

fn float(ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> Value {
    let (min, max) = numeric_bounds(ctx.field_override, DEFAULT_NUMBER_MAX);
    json!(float_between(min, max, rng))
}

fn boolean(_ctx: &FieldContext<'_>, rng: &mut dyn RngCore) -> Value {
    json!(rng.gen_bool(0.5))
}

fn null(_ctx: &FieldContext<'_>, _rng: &mut dyn RngCore) -> Value {
    Value::Null
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fake_string<F>(faker: F, rng: &mut dyn RngCore) -> String
where
    String: Dummy<F>,
{
    let mut rng = rng;
    faker.fake_with_rng(&mut rng)
}

/// Override bounds, or `0..=default_max`. Non-finite bounds fall back to the defaults.
fn numeric_bounds(field_override: &FieldOverride, default_max: f64) -> (f64, f64) {
    let min = field_override.min.filter(|v| v.is_finite()).unwrap_or(0.0);
    let max = field_override.max.filter(|v| v.is_finite()).unwrap_or(default_max);
    (min, max)
}

/// Uniform float in `[min, max]`; an empty or inverted range yields `min`.
fn float_between(min: f64, max: f64, rng: &mut dyn RngCore) -> f64 {
    if min >= max {
        min
    } else if (max - min).is_finite() {
        rng.gen_range(min..=max)
    } else {
        // Span overflows f64, scale by halves instead
        let step = rng.gen::<f64>() * (max / 2.0 - min / 2.0);
        (min + step + step).clamp(min, max)
    }
}

fn date_bound(ctx: &FieldContext<'_>, key: &str, raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    let parsed = parse_iso_date(raw);
    if parsed.is_none() {
        warn!(
            field = ctx.field_name,
            bound = key,
            value = raw,
            "Ignoring unparseable date bound"
        );
    }
    parsed
}
