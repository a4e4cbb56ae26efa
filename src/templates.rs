//! Canned advisory text shared by every responder profile.

use crate::model::{Profile, Topic};

pub const SUBSTITUTE: &str = "Here are common ingredient substitutions:

🥚 **Eggs**: Use flax eggs (1 tbsp ground flaxseed + 3 tbsp water per egg), applesauce, or mashed banana
🥛 **Milk**: Try almond milk, oat milk, soy milk, or coconut milk
🧈 **Butter**: Use coconut oil, olive oil, or vegan butter
🍖 **Chicken**: Substitute with tofu, tempeh, or chickpeas
🐟 **Fish**: Try tofu, mushrooms, or plant-based alternatives
🧀 **Cheese**: Use nutritional yeast, cashew cheese, or vegan cheese
🍞 **Bread**: Try lettuce wraps, rice paper, or gluten-free bread
🍝 **Pasta**: Use zucchini noodles, shirataki noodles, or whole wheat pasta
🌾 **Rice**: Try quinoa, cauliflower rice, couscous, or farro";

pub const ALLERGY: &str = "For common allergies, here are safe alternatives:

🥜 **Nut Allergies**: Use sunflower seed butter, tahini, or soy nut butter
🌾 **Gluten**: Choose rice, quinoa, buckwheat, or certified gluten-free products
🥛 **Dairy**: Opt for coconut, almond, oat, or soy-based alternatives
🦐 **Shellfish**: Avoid all shellfish; use plant-based proteins instead
🥚 **Eggs**: Use commercial egg replacers or flax/chia eggs

Always read labels carefully and consult with a healthcare provider for severe allergies.";

pub const COOKING: &str = "Quick cooking tips:

⏱️ **Save Time**: Prep ingredients in advance, use a pressure cooker, or batch cook
🔥 **Better Flavor**: Season in layers, taste as you go, and let meat rest before cutting
🥘 **Texture**: Don't overcrowd the pan, use high heat for searing, low for braising
❄️ **Storage**: Cool food before refrigerating, use airtight containers, label with dates
♻️ **Reduce Waste**: Save vegetable scraps for stock, freeze herbs in oil, repurpose leftovers
👨‍🍳 **Pro Tips**: Toast spices before using, add acid (lemon/vinegar) to brighten flavors, salt pasta water generously";

pub const NUTRITION: &str = "Nutrition basics:

🥗 **Balanced Plate**: 1/2 vegetables, 1/4 protein, 1/4 whole grains
💪 **Protein**: Aim for 0.8g per kg body weight (more if active)
🥤 **Hydration**: Drink 8-10 glasses of water daily
🍎 **Fiber**: Get 25-30g daily from fruits, vegetables, and whole grains
🥑 **Healthy Fats**: Include nuts, seeds, avocado, and olive oil
🍬 **Sugar**: Limit added sugars to less than 10% of daily calories
🧂 **Sodium**: Keep under 2,300mg per day
🌈 **Variety**: Eat a rainbow of colorful fruits and vegetables";

pub const MEAL_PREP: &str = "Meal prep strategies:

📅 **Plan Ahead**: Choose 3-4 recipes for the week
🛒 **Smart Shopping**: Make a list, shop once, buy in bulk
🍱 **Batch Cook**: Cook grains, proteins, and veggies in large batches
📦 **Portion Control**: Use containers to pre-portion meals
❄️ **Freeze Smart**: Label everything, freeze flat for easy storage
🔄 **Mix & Match**: Prepare versatile ingredients that work in multiple dishes";

pub const BUDGET: &str = "Eating healthy on a budget:

💰 **Buy Smart**: Choose seasonal produce, buy frozen vegetables, use store brands
🌾 **Protein Sources**: Eggs, beans, lentils, and canned fish are affordable
🥫 **Pantry Staples**: Stock rice, pasta, canned tomatoes, and dried beans
🥬 **Reduce Waste**: Use leftovers creatively, freeze extras, plan portions
🛍️ **Shop Sales**: Buy in bulk when on sale, use coupons, compare unit prices";

pub const MEAL_SWAP: &str = "Swapping Meals:

You can easily modify your meal plan:

1. Same Nutrition: Look for recipes with similar calorie counts
2. Keep Variety: Try different cuisines with the same nutritional profile
3. Batch Cooking: Swap to recipes that share ingredients for efficiency

Would you like suggestions for alternative recipes with similar nutrition?";

pub const MEAL_PLAN: &str = "About Your Meal Plan:

Your plan is customized for your goals. Each meal is balanced for:
• Calorie targets
• Protein requirements
• Nutritional variety

Need to adjust a specific day or meal? Just let me know which one!";

pub const NO_RECIPES: &str = "I don't see any recipes in your current recommendations. Please generate some recommendations first, then I can help you with specific questions about them!";

/// Ingredients the substitution reply can acknowledge by name, in lookup order.
pub const INGREDIENTS: [&str; 9] = [
    "egg", "milk", "butter", "chicken", "fish", "cheese", "bread", "pasta", "rice",
];

/// The static advisory block for a topic, if the topic has one.
pub fn template(topic: Topic) -> Option<&'static str> {
    match topic {
        Topic::Substitution => Some(SUBSTITUTE),
        Topic::Allergy => Some(ALLERGY),
        Topic::Cooking => Some(COOKING),
        Topic::Nutrition => Some(NUTRITION),
        Topic::MealPrep => Some(MEAL_PREP),
        Topic::Budget => Some(BUDGET),
        Topic::RecipeListing | Topic::MealPlan | Topic::Help | Topic::Default => None,
    }
}

/// Bullet lines and sample questions of a help or introduction reply.
#[derive(Debug)]
pub struct Menu {
    pub items: &'static [&'static str],
    pub examples: &'static [&'static str],
}

pub static HELP_MENU: Menu = Menu {
    items: &[
        "Ingredient Substitutions - Swap ingredients you don't have",
        "Allergy Alternatives - Safe alternatives for common allergens",
        "Cooking Tips - Techniques and time-saving tricks",
        "Nutrition Advice - Understanding your nutritional needs",
        "Meal Prep - Planning and preparing meals efficiently",
        "Budget Tips - Eating healthy affordably",
        "Recipe Questions - Details about your recommended recipes",
    ],
    examples: &[
        "How can I substitute eggs?",
        "What are the calories in my recipes?",
        "How do I meal prep for the week?",
    ],
};

static STANDARD_INTRO: Menu = Menu {
    items: &[
        "Ingredient substitutions - Ask about swapping ingredients",
        "Allergy alternatives - Get safe food alternatives",
        "Cooking tips - Learn cooking techniques",
        "Nutrition advice - Understand nutritional basics",
        "Meal prep - Plan and prepare meals efficiently",
        "Budget tips - Eat healthy affordably",
    ],
    examples: &[],
};

static LITE_INTRO: Menu = Menu {
    items: &[
        "Ingredient substitutions - Ask about swapping ingredients",
        "Allergy alternatives - Get safe food alternatives",
        "Cooking tips - Learn cooking techniques",
        "Nutrition advice - Understand nutritional basics",
    ],
    examples: &[],
};

static STANDARD_RECIPES: Menu = Menu {
    items: &[
        "Ingredient substitutions",
        "Nutritional information",
        "Cooking tips and techniques",
        "Meal prep strategies",
        "Budget-friendly alternatives",
    ],
    examples: &[
        "What are the calories in these recipes?",
        "How can I substitute [ingredient]?",
        "Give me cooking tips",
        "How do I meal prep these?",
    ],
};

static LITE_RECIPES: Menu = Menu {
    items: &[
        "Ingredient substitutions",
        "Nutritional information",
        "Cooking tips and techniques",
        "Allergy alternatives",
    ],
    examples: &[
        "What are the calories in these recipes?",
        "How can I substitute chicken?",
        "Give me cooking tips",
    ],
};

/// What the default reply offers when there are no recipes to talk about.
pub fn intro_menu(profile: Profile) -> &'static Menu {
    match profile {
        Profile::Standard => &STANDARD_INTRO,
        Profile::Lite => &LITE_INTRO,
    }
}

/// What the default reply offers once recipes are in the context.
pub fn recipes_menu(profile: Profile) -> &'static Menu {
    match profile {
        Profile::Standard => &STANDARD_RECIPES,
        Profile::Lite => &LITE_RECIPES,
    }
}
