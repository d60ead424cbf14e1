use clap::{Subcommand, ValueEnum};
use studycoach_core::progression::UserState;
use studycoach_core::shop::{ItemCategory, Shop};

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Theme,
    Avatar,
    Music,
}

impl From<CategoryArg> for ItemCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Theme => ItemCategory::Theme,
            CategoryArg::Avatar => ItemCategory::Avatar,
            CategoryArg::Music => ItemCategory::Music,
        }
    }
}

#[derive(Subcommand)]
pub enum ShopAction {
    /// Browse the catalog
    List {
        /// Restrict to one category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk a purchase/equip sequence on a throwaway wallet
    Demo {
        /// Item ids to buy, in order
        #[arg(long, value_delimiter = ',', required = true)]
        buy: Vec<String>,
        /// Item id to equip afterwards
        #[arg(long)]
        equip: Option<String>,
        /// Starting coin balance of the demo wallet
        #[arg(long, default_value = "2000")]
        coins: u64,
    },
}

pub fn run(action: ShopAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ShopAction::List { category, json } => {
            let shop = Shop::new();
            let items: Vec<_> = match category {
                Some(category) => shop.items_in(category.into()),
                None => shop.items().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else {
                for item in items {
                    let mut flags = String::new();
                    if item.owned {
                        flags.push_str("  owned");
                    }
                    if item.equipped {
                        flags.push_str(", equipped");
                    }
                    println!(
                        "{:<7} {:<18} {:<18} {:>5}{flags}",
                        item.category.label(),
                        item.id,
                        item.name,
                        item.price
                    );
                }
            }
        }
        ShopAction::Demo { buy, equip, coins } => {
            let mut shop = Shop::new();
            let mut user = UserState {
                coins,
                ..UserState::new()
            };

            for id in &buy {
                shop.purchase(id, &mut user)?;
                let item = shop.get(id).ok_or_else(|| format!("unknown item: {id}"))?;
                println!(
                    "Bought {} ({}) for {} coins, {} left",
                    item.id, item.name, item.price, user.coins
                );
            }
            if let Some(id) = equip {
                shop.equip(&id)?;
                println!("Equipped {id}");
            }

            println!("\nWallet: {} coins", user.coins);
            for category in ItemCategory::ALL {
                if let Some(item) = shop.equipped(category) {
                    println!("  {:<7} {}", category.label(), item.name);
                }
            }
        }
    }
    Ok(())
}
