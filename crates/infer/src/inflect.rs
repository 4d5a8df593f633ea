//! Inflection Helpers - English singular/plural forms and identifier casing
//!
//! Pure, deterministic name transforms used to derive accessor and model
//! names from table names. An irregular-forms table backs the suffix rules;
//! `plural` routes through `singular` first, so an already-plural table name
//! comes back unchanged ("posts" stays "posts").

/// Irregular forms the suffix rules cannot express, as (singular, plural)
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
];

/// Singularize an English table name
pub fn singular(name: &str) -> String {
    if let Some((singular, _)) = IRREGULAR_FORMS.iter().find(|(_, p)| *p == name) {
        return singular.to_string();
    }

    if name.ends_with("ies") && name.len() > 3 {
        format!("{}y", &name[..name.len() - 3])
    } else if name.ends_with("sses")
        || name.ends_with("shes")
        || name.ends_with("ches")
        || name.ends_with("xes")
        || name.ends_with("zes")
        || name.ends_with("ses")
    {
        name[..name.len() - 2].to_string()
    } else if name.ends_with('s')
        && !name.ends_with("ss")
        && !name.ends_with("us")
        && !name.ends_with("is")
        && name.len() > 1
    {
        name[..name.len() - 1].to_string()
    } else {
        name.to_string()
    }
}

/// Pluralize an English table name. Already-plural input is stable.
pub fn plural(name: &str) -> String {
    pluralize_base(&singular(name))
}

fn pluralize_base(name: &str) -> String {
    if let Some((_, plural)) = IRREGULAR_FORMS.iter().find(|(s, _)| *s == name) {
        return plural.to_string();
    }

    let ends_in_consonant_y = name.ends_with('y')
        && !matches!(
            name.chars().rev().nth(1),
            Some('a') | Some('e') | Some('i') | Some('o') | Some('u')
        );

    if ends_in_consonant_y {
        format!("{}ies", &name[..name.len() - 1])
    } else if name.ends_with('s')
        || name.ends_with('x')
        || name.ends_with('z')
        || name.ends_with("ch")
        || name.ends_with("sh")
    {
        format!("{}es", name)
    } else {
        format!("{}s", name)
    }
}

/// Convert a snake_case / kebab-case / arbitrary-case name to lowerCamelCase
pub fn camel_case(name: &str) -> String {
    let parts: Vec<&str> = name.split(['_', '-']).filter(|p| !p.is_empty()).collect();
    let Some((first, rest)) = parts.split_first() else {
        return name.to_string();
    };

    let mut result = first.to_lowercase();
    for part in rest {
        let mut chars = part.chars();
        if let Some(head) = chars.next() {
            result.extend(head.to_uppercase());
            result.extend(chars.flat_map(|c| c.to_lowercase()));
        }
    }
    result
}

/// Convert a name to PascalCase
pub fn pascal_case(name: &str) -> String {
    let camel = camel_case(name);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => camel,
    }
}

/// The class name a code-emission consumer uses for a table's model
pub fn model_name(table: &str) -> String {
    pascal_case(&singular(table))
}

/// Whether a name can be inflected and camel-cased into a source-level
/// identifier: non-empty, ASCII letters/digits/underscores/hyphens only,
/// no leading digit.
pub fn is_safe_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
