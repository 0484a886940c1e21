//! Keyword-matched assistant.
//!
//! State-free: given free text and a snapshot of the business
//! aggregates, detects the language (Bangla or English) and walks an
//! ordered list of (keyword set -> response builder) pairs over the
//! lowercased input. First match wins; order is significant because
//! keyword sets can overlap in richer phrasings. No parsing, no
//! learning — a deterministic lookup table.

use crate::services::business::DashboardMetrics;
use crate::utils::format_taka;

/// Detected input language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Bn,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }
}

/// Owner line for the assistant's owner answer
#[derive(Debug, Clone)]
pub struct OwnerBrief {
    pub name: String,
    pub investment: f64,
    pub percentage: f64,
}

/// Aggregate metrics plus owner briefs, handed in by the caller
#[derive(Debug, Clone)]
pub struct BusinessSnapshot {
    pub metrics: DashboardMetrics,
    pub owners: Vec<OwnerBrief>,
}

/// Detect Bangla by presence of any character in the Bangla Unicode
/// block (U+0980..U+09FF); everything else is English.
pub fn detect_language(text: &str) -> Language {
    if text.chars().any(|c| ('\u{0980}'..='\u{09FF}').contains(&c)) {
        Language::Bn
    } else {
        Language::En
    }
}

struct Rule {
    keywords: &'static [&'static str],
    respond: fn(&BusinessSnapshot, Language) -> String,
}

// Evaluated top to bottom, first match wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["sale", "বিক্রয়", "revenue", "আয়"],
        respond: sales_response,
    },
    Rule {
        keywords: &["profit", "লাভ", "loss", "ক্ষতি"],
        respond: profit_response,
    },
    Rule {
        keywords: &["expense", "খরচ", "cost"],
        respond: expense_response,
    },
    Rule {
        keywords: &["production", "উৎপাদন", "batch", "ব্যাচ"],
        respond: production_response,
    },
    Rule {
        keywords: &["warranty", "ওয়ারেন্টি", "claim", "দাবি"],
        respond: warranty_response,
    },
    Rule {
        keywords: &["owner", "মালিক", "investment", "বিনিয়োগ", "share", "অংশ"],
        respond: owner_response,
    },
    Rule {
        keywords: &["hello", "hi", "হ্যালো", "হাই", "নমস্কার"],
        respond: greeting_response,
    },
    Rule {
        keywords: &["help", "সাহায্য", "what can", "কি করতে পারি"],
        respond: help_response,
    },
];

/// Answer `user_input` from the snapshot, in the input's language.
pub fn generate_response(user_input: &str, data: &BusinessSnapshot) -> String {
    let input_lower = user_input.to_lowercase();
    let language = detect_language(user_input);

    for rule in RULES {
        if rule.keywords.iter().any(|k| input_lower.contains(k)) {
            return (rule.respond)(data, language);
        }
    }

    fallback_response(language)
}

fn sales_response(data: &BusinessSnapshot, language: Language) -> String {
    let total = format_taka(data.metrics.total_sales);
    let count = data.metrics.sales_count;
    match language {
        Language::Bn => format!(
            "আপনার মোট বিক্রয় {total} টাকা। এ পর্যন্ত {count}টি বিক্রয় লেনদেন রেকর্ড করা হয়েছে।"
        ),
        Language::En => format!(
            "Your total sales are ৳{total}. You have recorded {count} sales transactions so far."
        ),
    }
}

fn profit_response(data: &BusinessSnapshot, language: Language) -> String {
    let m = &data.metrics;
    let costs = format_taka(m.total_expenses + m.total_production);
    let amount = format_taka(m.profit_loss.abs());
    let sales = format_taka(m.total_sales);
    match language {
        Language::Bn => {
            let status = if m.profit_loss >= 0.0 { "লাভ" } else { "ক্ষতি" };
            format!(
                "আপনার ব্যবসায় {status} হয়েছে {amount} টাকা। বিক্রয়: {sales} টাকা, খরচ: {costs} টাকা।"
            )
        }
        Language::En => {
            let status = if m.profit_loss >= 0.0 { "profit" } else { "loss" };
            format!(
                "Your business has made a {status} of ৳{amount}. Sales: ৳{sales}, Costs: ৳{costs}."
            )
        }
    }
}

fn expense_response(data: &BusinessSnapshot, language: Language) -> String {
    let total = format_taka(data.metrics.total_expenses);
    let count = data.metrics.expense_count;
    match language {
        Language::Bn => {
            format!("আপনার মোট খরচ {total} টাকা। এ পর্যন্ত {count}টি খরচ রেকর্ড করা হয়েছে।")
        }
        Language::En => {
            format!("Your total expenses are ৳{total}. You have recorded {count} expense entries.")
        }
    }
}

fn production_response(data: &BusinessSnapshot, language: Language) -> String {
    let total = format_taka(data.metrics.total_production);
    let count = data.metrics.production_count;
    match language {
        Language::Bn => format!(
            "আপনার মোট উৎপাদন খরচ {total} টাকা। এ পর্যন্ত {count}টি ব্যাচ তৈরি করা হয়েছে।"
        ),
        Language::En => format!(
            "Your total production cost is ৳{total}. You have created {count} production batches."
        ),
    }
}

fn warranty_response(data: &BusinessSnapshot, language: Language) -> String {
    let m = &data.metrics;
    match language {
        Language::Bn => format!(
            "মোট ওয়ারেন্টি দাবি: {}টি। প্রতিস্থাপিত: {}টি, অপেক্ষমান: {}টি।",
            m.warranty_count, m.warranty_replaced, m.warranty_pending
        ),
        Language::En => format!(
            "Total warranty claims: {}. Replaced: {}, Pending: {}.",
            m.warranty_count, m.warranty_replaced, m.warranty_pending
        ),
    }
}

fn owner_response(data: &BusinessSnapshot, language: Language) -> String {
    if data.owners.is_empty() {
        return match language {
            Language::Bn => "এখনও কোনো মালিক যোগ করা হয়নি।".to_string(),
            Language::En => "No owners have been added yet.".to_string(),
        };
    }

    let mut response = match language {
        Language::Bn => "মালিক তথ্য:\n".to_string(),
        Language::En => "Owner Information:\n".to_string(),
    };

    for owner in &data.owners {
        let investment = format_taka(owner.investment);
        match language {
            Language::Bn => response.push_str(&format!(
                "{}: {} টাকা ({:.2}%)\n",
                owner.name, investment, owner.percentage
            )),
            Language::En => response.push_str(&format!(
                "{}: ৳{} ({:.2}%)\n",
                owner.name, investment, owner.percentage
            )),
        }
    }

    response
}

fn greeting_response(_data: &BusinessSnapshot, language: Language) -> String {
    match language {
        Language::Bn => "আপনাকে স্বাগতম! আমি খাতা সহায়ক। আপনার ব্যবসায়িক প্রশ্নের উত্তর দিতে এখানে আছি। আপনি বিক্রয়, খরচ, লাভ, উৎপাদন বা ওয়ারেন্টি সম্পর্কে জিজ্ঞাসা করতে পারেন।".to_string(),
        Language::En => "Welcome! I'm the Khata assistant. I'm here to help you with your business questions. You can ask me about sales, expenses, profit, production, or warranty.".to_string(),
    }
}

fn help_response(_data: &BusinessSnapshot, language: Language) -> String {
    match language {
        Language::Bn => "আমি আপনাকে এই বিষয়গুলিতে সাহায্য করতে পারি:\n- বিক্রয় এবং আয় সম্পর্কে প্রশ্ন\n- খরচ এবং ব্যয় সম্পর্কে প্রশ্ন\n- লাভ এবং ক্ষতি গণনা\n- উৎপাদন ব্যাচ তথ্য\n- ওয়ারেন্টি দাবি পরিসংখ্যান\n- মালিক এবং বিনিয়োগ তথ্য".to_string(),
        Language::En => "I can help you with:\n- Sales and revenue questions\n- Expenses and costs\n- Profit and loss calculations\n- Production batch information\n- Warranty claim statistics\n- Owner and investment information".to_string(),
    }
}

fn fallback_response(language: Language) -> String {
    match language {
        Language::Bn => "দুঃখিত, আমি এই প্রশ্নটি বুঝতে পারছি না। আপনি বিক্রয়, খরচ, লাভ, উৎপাদন বা ওয়ারেন্টি সম্পর্কে জিজ্ঞাসা করতে পারেন।".to_string(),
        Language::En => "I didn't understand that question. You can ask me about sales, expenses, profit, production, or warranty.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> BusinessSnapshot {
        BusinessSnapshot {
            metrics: DashboardMetrics {
                total_sales: 800.0,
                total_expenses: 100.0,
                total_production: 200.0,
                profit_loss: 500.0,
                sales_count: 2,
                expense_count: 1,
                production_count: 1,
                warranty_count: 3,
                warranty_replaced: 1,
                warranty_pending: 2,
            },
            owners: vec![OwnerBrief {
                name: "Rahim".to_string(),
                investment: 5000.0,
                percentage: 50.0,
            }],
        }
    }

    #[test]
    fn detects_bangla_by_unicode_block() {
        assert_eq!(detect_language("বিক্রয় কত?"), Language::Bn);
        assert_eq!(detect_language("how are sales?"), Language::En);
        assert_eq!(detect_language(""), Language::En);
    }

    #[test]
    fn bangla_sales_keyword_gets_bangla_template() {
        let response = generate_response("বিক্রয় কেমন চলছে?", &snapshot());
        assert!(response.contains("মোট বিক্রয়"), "response = {response}");
        assert!(response.contains("800"), "response = {response}");
    }

    #[test]
    fn hello_gets_english_greeting() {
        let response = generate_response("hello", &snapshot());
        assert!(response.starts_with("Welcome!"), "response = {response}");
    }

    #[test]
    fn unknown_input_falls_back_in_detected_language() {
        let en = generate_response("xyzzy", &snapshot());
        assert!(en.starts_with("I didn't understand"), "response = {en}");

        let bn = generate_response("আবহাওয়া?", &snapshot());
        assert!(bn.starts_with("দুঃখিত"), "response = {bn}");
    }

    #[test]
    fn sales_rule_wins_over_profit_rule() {
        // Input matches both sets; the sales rule is evaluated first
        let response = generate_response("profit from sales?", &snapshot());
        assert!(
            response.contains("total sales are"),
            "response = {response}"
        );
    }

    #[test]
    fn warranty_numbers_are_reported() {
        let response = generate_response("warranty status", &snapshot());
        assert_eq!(
            response,
            "Total warranty claims: 3. Replaced: 1, Pending: 2."
        );
    }

    #[test]
    fn owner_answer_lists_each_owner() {
        let response = generate_response("who are the owners", &snapshot());
        assert!(response.starts_with("Owner Information:"));
        assert!(response.contains("Rahim: ৳5,000 (50.00%)"));
    }

    #[test]
    fn empty_owner_list_has_its_own_message() {
        let mut data = snapshot();
        data.owners.clear();
        let response = generate_response("owner shares", &data);
        assert_eq!(response, "No owners have been added yet.");
    }
}
