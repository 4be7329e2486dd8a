//! `worldseed-lint rules`: print the axiom-to-rule mapping.

use serde_json::json;
use worldseed_rules::AXIOM_RULE_TABLE;

pub fn run(json_output: bool) {
    if json_output {
        let axioms: Vec<_> = AXIOM_RULE_TABLE
            .iter()
            .map(|(axiom, rule)| {
                json!({
                    "axiom": axiom.as_str(),
                    "rule": rule,
                })
            })
            .collect();
        let payload = json!({
            "schema": 1,
            "axioms": axioms,
        });
        let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|err| {
            eprintln!("error: failed to render rule table: {err}");
            std::process::exit(2);
        });
        println!("{rendered}");
        return;
    }

    println!("worldseed-lint rules");
    for (axiom, rule) in AXIOM_RULE_TABLE {
        println!("  {:<4} {rule}", axiom.as_str());
    }
}
