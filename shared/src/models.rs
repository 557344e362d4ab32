use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Price {
    Inr(u32),
    Custom,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Inr(amount) => write!(f, "₹{}", amount),
            Price::Custom => f.write_str("Custom"),
        }
    }
}

pub const TRIAL_PRICE: Price = Price::Inr(499);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: &'static str,
    pub title: &'static str,
    pub price: Price,
    pub description: &'static str,
}

pub static PRODUCTS: [Product; 3] = [
    Product {
        id: "reboot",
        title: "7-Day Ayurvedic Reboot Kit",
        price: Price::Inr(999),
        description: "Personalized ritual kit — oil/tea + ritual card. Trial-friendly.",
    },
    Product {
        id: "hair",
        title: "Personalized Hair Regimen Starter",
        price: Price::Inr(1299),
        description: "Monthly oil + serum follow-up subscription. Targets hair fall & shine.",
    },
    Product {
        id: "corporate",
        title: "Corporate Wellness Pilot (8 weeks)",
        price: Price::Custom,
        description: "Onboarding quiz + 2 sends + group webinar with Ayurvedic expert.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKey {
    Concern,
    Exercise,
    Pref,
}

impl QuestionKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            QuestionKey::Concern => "concern",
            QuestionKey::Exercise => "exercise",
            QuestionKey::Pref => "pref",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "concern" => Ok(QuestionKey::Concern),
            "exercise" => Ok(QuestionKey::Exercise),
            "pref" => Ok(QuestionKey::Pref),
            other => Err(format!("Unknown question key: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: &'static str,
    pub options: &'static [QuizOption],
}

pub static QUESTIONS: [Question; 3] = [
    Question {
        key: QuestionKey::Concern,
        prompt: "What's your primary concern?",
        options: &[
            QuizOption { value: "digestion", label: "Digestion" },
            QuizOption { value: "stress", label: "Stress & Sleep" },
            QuizOption { value: "hair", label: "Hair & Skin" },
        ],
    },
    Question {
        key: QuestionKey::Exercise,
        prompt: "How often do you exercise?",
        options: &[
            QuizOption { value: "regular", label: "4+ times/week" },
            QuizOption { value: "sometimes", label: "1–3 times/week" },
            QuizOption { value: "rarely", label: "Rarely" },
        ],
    },
    Question {
        key: QuestionKey::Pref,
        prompt: "Do you prefer ingestible (tea/capsule) or topical ritual?",
        options: &[
            QuizOption { value: "ingestible", label: "Ingestible" },
            QuizOption { value: "topical", label: "Topical" },
        ],
    },
];

pub type QuizAnswers = BTreeMap<QuestionKey, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub heading: &'static str,
    pub lead: &'static str,
    pub product_name: &'static str,
    pub product_id: &'static str,
    pub prompt: &'static str,
}

// Every completed quiz lands on the same starter kit.
pub const RECOMMENDATION: Recommendation = Recommendation {
    heading: "Thanks — here’s your starter recommendation",
    lead: "Based on your answers, we recommend the",
    product_name: "7-Day Reboot Kit",
    product_id: "reboot",
    prompt: "Would you like to pre-order at the special trial price?",
};

impl Recommendation {
    /// Body copy split around the product name, which the screen emphasises.
    pub fn segments(&self) -> [String; 3] {
        [
            format!("{} ", self.lead),
            self.product_name.to_string(),
            format!(". {}", self.prompt),
        ]
    }

    pub fn summary(&self) -> String {
        self.segments().concat()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreorderSource {
    Form,
    Quiz,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preorder {
    pub reference: Uuid,
    pub email: String,
    pub source: PreorderSource,
    pub product_id: String,
}

impl Preorder {
    pub fn new(email: impl Into<String>, source: PreorderSource, product_id: impl Into<String>) -> Self {
        Self {
            reference: Uuid::new_v4(),
            email: email.into(),
            source,
            product_id: product_id.into(),
        }
    }

    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}
