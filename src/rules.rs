//! Keyword rules that pick a canned reply.
//!
//! A [`RuleSet`] is an ordered list of rules. Each rule has trigger keywords
//! and a handler. The first rule whose trigger appears in the lower-cased
//! message and whose handler produces text wins. A handler may decline by
//! returning `None`, in which case evaluation carries on with the next rule.
//! When nothing answers, the default reply is used.

use crate::extractor::extract_records;
use crate::model::{Profile, RecipeRecord, Topic};
use crate::templates::{self, Menu, INGREDIENTS};
use log::debug;

/// How many recipes the listing reply shows.
const LISTED_RECIPES: usize = 5;

/// Protein grams above which a recipe counts as protein-rich.
const HIGH_PROTEIN_GRAMS: f64 = 20.0;

const RECIPE_TRIGGERS: &[&str] = &["recipe", "meal", "dish", "food"];
const NUTRITION_TRIGGERS: &[&str] = &["calorie", "calories", "nutrition", "protein", "carb", "fat"];
const SUBSTITUTION_TRIGGERS: &[&str] = &[
    "substitute",
    "replace",
    "instead",
    "swap",
    "alternative",
    "change",
];
const ALLERGY_TRIGGERS: &[&str] = &["allergy", "allergic", "intolerance", "sensitive", "avoid"];
const COOKING_TRIGGERS: &[&str] = &[
    "cook", "prepare", "make", "how to", "tips", "bake", "fry", "boil",
];
const MEAL_PREP_TRIGGERS: &[&str] = &[
    "meal prep",
    "prepare ahead",
    "batch",
    "planning",
    "week",
    "advance",
];
const BUDGET_TRIGGERS: &[&str] = &[
    "budget",
    "cheap",
    "affordable",
    "save money",
    "cost",
    "price",
    "expensive",
];
const MEAL_SLOT_TRIGGERS: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "breakfast",
    "lunch",
    "dinner",
    "snack",
];
const HELP_TRIGGERS: &[&str] = &["help", "what can", "how do", "?"];

const SWAP_INTENT: &[&str] = &["swap", "change", "different"];
const MEAL_PLAN_MARKERS: &[&str] = &["meal plan", "weekly"];

/// Everything a rule handler may look at.
#[derive(Debug)]
pub struct Query<'a> {
    /// The user's message, lower-cased.
    pub message: String,
    pub context_text: &'a str,
    pub records: &'a [RecipeRecord],
    pub profile: Profile,
}

impl Query<'_> {
    fn mentions_any(&self, keywords: &[&str]) -> bool {
        contains_any(&self.message, keywords)
    }
}

type Handler = fn(&Query<'_>) -> Option<String>;

/// A trigger set paired with the handler that answers it.
#[derive(Clone, Copy)]
pub struct Rule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
    respond: Handler,
}

impl Rule {
    fn new(topic: Topic, triggers: &'static [&'static str], respond: Handler) -> Self {
        Rule {
            topic,
            triggers,
            respond,
        }
    }

    /// Whether the lower-cased message contains any trigger keyword.
    pub fn matches(&self, message: &str) -> bool {
        contains_any(message, self.triggers)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("topic", &self.topic)
            .field("triggers", &self.triggers)
            .finish()
    }
}

/// A rendered reply and the topic that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub topic: Topic,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    profile: Profile,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// All ten rules, in priority order.
    pub fn standard() -> Self {
        Self::for_profile(Profile::Standard)
    }

    /// The reduced rule set: substitutions, allergies, cooking, nutrition.
    pub fn lite() -> Self {
        Self::for_profile(Profile::Lite)
    }

    pub fn for_profile(profile: Profile) -> Self {
        RuleSet {
            profile,
            rules: profile.topics().iter().filter_map(|&topic| rule_for(topic)).collect(),
        }
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Pick and render the reply for a message against the recipe context.
    pub fn respond(&self, user_message: &str, context_text: &str) -> Reply {
        let records = extract_records(context_text);
        let query = Query {
            message: user_message.to_lowercase(),
            context_text,
            records: &records,
            profile: self.profile,
        };

        let reply = self.evaluate(&query);
        debug!("Answered with the {} rule", reply.topic);
        reply
    }

    /// Run the rules over an already prepared query.
    pub fn evaluate(&self, query: &Query<'_>) -> Reply {
        for rule in &self.rules {
            if !rule.matches(&query.message) {
                continue;
            }
            match (rule.respond)(query) {
                Some(text) => {
                    return Reply {
                        topic: rule.topic,
                        text,
                    }
                }
                None => debug!("Rule {} matched but passed", rule.topic),
            }
        }

        Reply {
            topic: Topic::Default,
            text: default_reply(query),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

fn rule_for(topic: Topic) -> Option<Rule> {
    let rule = match topic {
        Topic::RecipeListing => Rule::new(topic, RECIPE_TRIGGERS, recipe_listing),
        Topic::Nutrition => Rule::new(topic, NUTRITION_TRIGGERS, nutrition),
        Topic::Substitution => Rule::new(topic, SUBSTITUTION_TRIGGERS, substitution),
        Topic::Allergy => Rule::new(topic, ALLERGY_TRIGGERS, allergy),
        Topic::Cooking => Rule::new(topic, COOKING_TRIGGERS, cooking),
        Topic::MealPrep => Rule::new(topic, MEAL_PREP_TRIGGERS, meal_prep),
        Topic::Budget => Rule::new(topic, BUDGET_TRIGGERS, budget),
        Topic::MealPlan => Rule::new(topic, MEAL_SLOT_TRIGGERS, meal_slot),
        Topic::Help => Rule::new(topic, HELP_TRIGGERS, help),
        Topic::Default => return None,
    };
    Some(rule)
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

fn recipe_listing(query: &Query<'_>) -> Option<String> {
    if query.records.is_empty() {
        return Some(templates::NO_RECIPES.to_string());
    }

    let listing = query
        .records
        .iter()
        .take(LISTED_RECIPES)
        .map(|record| match record.calories {
            Some(calories) => format!("• **{}** ({:.0} cal)", record.name, calories),
            None => format!("• **{}**", record.name),
        })
        .collect::<Vec<_>>()
        .join("\n");

    Some(format!(
        "Based on your recommendations, here are your recipes:\n\n{}\n\n\
         Each recipe is tailored to your nutritional needs. Would you like to know more about a specific recipe, or need help with substitutions?",
        listing
    ))
}

fn nutrition(query: &Query<'_>) -> Option<String> {
    let records = query.records;
    if !records.iter().any(|record| record.calories.is_some()) {
        return Some(templates::NUTRITION.to_string());
    }

    // Recipes without a calorie line count as zero but still divide the average.
    let total: f64 = records.iter().filter_map(|record| record.calories).sum();
    let average = total / records.len() as f64;

    let mut overview = format!(
        "Nutritional Overview:\n\n\
         • Total Calories: {:.0} kcal across {} recipes\n\
         • Average per Recipe: {:.0} kcal\n",
        total,
        records.len(),
        average
    );

    if query.profile == Profile::Lite {
        overview.push('\n');
        overview.push_str(templates::NUTRITION);
        return Some(overview);
    }

    let protein_rich = records
        .iter()
        .filter(|record| record.protein.is_some_and(|grams| grams > HIGH_PROTEIN_GRAMS))
        .count();
    overview.push_str(&format!(
        "• Protein-rich options: {} recipes with 20g+ protein\n\n{}\n\n\
         Need help adjusting your calorie intake or finding higher/lower calorie options?",
        protein_rich,
        templates::NUTRITION
    ));
    Some(overview)
}

fn substitution(query: &Query<'_>) -> Option<String> {
    let Some(ingredient) = INGREDIENTS
        .iter()
        .find(|ingredient| query.message.contains(*ingredient))
    else {
        return Some(templates::SUBSTITUTE.to_string());
    };

    let mut response = format!(
        "Great question about substituting **{}**!\n\n{}",
        ingredient,
        templates::SUBSTITUTE
    );
    if !query.records.is_empty() {
        response.push_str(&format!(
            "\n\n💡 **Tip**: You have {} recipes. I can help you modify any of them with these substitutions!",
            query.records.len()
        ));
    }
    Some(response)
}

fn allergy(_query: &Query<'_>) -> Option<String> {
    templates::template(Topic::Allergy).map(str::to_string)
}

fn cooking(_query: &Query<'_>) -> Option<String> {
    templates::template(Topic::Cooking).map(str::to_string)
}

fn meal_prep(_query: &Query<'_>) -> Option<String> {
    templates::template(Topic::MealPrep).map(str::to_string)
}

fn budget(query: &Query<'_>) -> Option<String> {
    if query.records.is_empty() {
        return Some(templates::BUDGET.to_string());
    }

    Some(format!(
        "Budget-Friendly Tips for Your {} Recipes:\n\n{}\n\n\
         Pro Tip: Buy ingredients that appear in multiple recipes to save money and reduce waste!",
        query.records.len(),
        templates::BUDGET
    ))
}

/// Day and meal-slot questions. Passes when the message neither asks for a
/// swap nor comes with a meal plan in the context.
fn meal_slot(query: &Query<'_>) -> Option<String> {
    if query.mentions_any(SWAP_INTENT) {
        return Some(templates::MEAL_SWAP.to_string());
    }

    let context = query.context_text.to_lowercase();
    if contains_any(&context, MEAL_PLAN_MARKERS) {
        return Some(templates::MEAL_PLAN.to_string());
    }

    None
}

fn help(query: &Query<'_>) -> Option<String> {
    let scope = if query.records.is_empty() {
        "your".to_string()
    } else {
        query.records.len().to_string()
    };

    let mut response = format!(
        "I'm here to help with {} recipes!\n\nI can assist you with:\n\n",
        scope
    );
    push_items(&mut response, &templates::HELP_MENU);
    response.push_str("\nJust ask me anything! For example:\n");
    push_examples(&mut response, &templates::HELP_MENU);
    Some(response)
}

fn default_reply(query: &Query<'_>) -> String {
    if query.records.is_empty() {
        let mut response = String::from("I'm your diet assistant! I can help with:\n\n");
        push_items(&mut response, templates::intro_menu(query.profile));
        response.push_str("\nAsk me anything about diet, nutrition, or cooking!");
        return response;
    }

    let menu = templates::recipes_menu(query.profile);
    let mut response = format!(
        "I have information about your {} recommended recipes!\n\nI can help you with:\n",
        query.records.len()
    );
    push_items(&mut response, menu);
    response.push_str("\nTry asking:\n");
    push_examples(&mut response, menu);
    response.push_str("\nWhat would you like to know?");
    response
}

fn push_items(response: &mut String, menu: &Menu) {
    for item in menu.items {
        response.push_str(&format!("• {}\n", item));
    }
}

fn push_examples(response: &mut String, menu: &Menu) {
    for example in menu.examples {
        response.push_str(&format!("- \"{}\"\n", example));
    }
}
