use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};

use shared::models::{CheckoutForm, PaymentMethod};
use shared::money::{format_rupiah, format_total};
use storefront::{
    BrowserLauncher, ChatLauncher, CheckoutOutcome, CheckoutPhase, PrintLauncher, ProfileKind,
    Storefront, setup_environment,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "DanTen food stall storefront")]
struct Cli {
    /// Storefront profile (`cart` or `detail`)
    #[arg(long, global = true)]
    profile: Option<ProfileKind>,

    /// Where the cart is persisted
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the menu, optionally for one category
    Menu {
        #[arg(long, short, default_value = "all")]
        category: String,
    },
    /// List the profile's category menu
    Categories,
    /// Show one item
    Show { id: String },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Check out the whole cart
    Checkout(BuyerArgs),
    /// Order one item directly
    Order {
        id: String,
        #[arg(long, short, default_value_t = 1)]
        qty: u32,
        #[command(flatten)]
        buyer: BuyerArgs,
    },
}

#[derive(Subcommand, Debug)]
enum CartAction {
    Add { id: String },
    Set {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    Remove { id: String },
    Show,
    Clear,
}

#[derive(Args, Debug)]
struct BuyerArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    class: String,
    #[arg(long)]
    phone: String,
    #[arg(long, default_value = "")]
    notes: String,
    /// `cash` or `qris`
    #[arg(long)]
    payment: Option<PaymentMethod>,
    /// Print the chat link instead of opening a browser
    #[arg(long)]
    no_open: bool,
}

impl BuyerArgs {
    fn form(&self) -> CheckoutForm {
        let form = CheckoutForm::new(&self.name, &self.class, &self.phone).with_notes(&self.notes);
        match self.payment {
            Some(method) => form.with_payment(method),
            None => form,
        }
    }

    fn launcher(&self) -> Arc<dyn ChatLauncher> {
        if self.no_open {
            Arc::new(PrintLauncher)
        } else {
            Arc::new(BrowserLauncher)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = setup_environment();
    if let Some(profile) = cli.profile {
        config.profile = profile;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }

    let launcher: Arc<dyn ChatLauncher> = match &cli.command {
        Command::Checkout(buyer) | Command::Order { buyer, .. } => buyer.launcher(),
        _ => Arc::new(PrintLauncher),
    };
    let mut store = Storefront::from_config(&config, launcher).context("building storefront")?;

    match cli.command {
        Command::Categories => {
            for option in &store.profile().categories {
                println!("{:<8} {}", option.value, option.label);
            }
        }
        Command::Menu { category } => {
            load(&mut store).await?;
            if !store.profile().has_category(&category) {
                tracing::warn!(category = %category, "Category is not on this storefront's menu");
            }
            let items = store.menu(&category);
            if items.is_empty() {
                println!("Tidak ada menu untuk kategori ini.");
            }
            for item in items {
                println!("[{}] {} - {}", item.id, item.name, item.price);
            }
        }
        Command::Show { id } => {
            load(&mut store).await?;
            let item = store.item(&id)?;
            println!("{}", item.name);
            println!("{}", item.price);
            println!("{}", item.description_or_default());
            if !item.category.is_empty() {
                println!("Kategori: {}", item.category.join(", "));
            }
        }
        Command::Cart { action } => cart_command(&mut store, action).await?,
        Command::Checkout(buyer) => {
            let outcome = store.checkout(&buyer.form()).await?;
            report(&outcome);
        }
        Command::Order { id, qty, buyer } => {
            load(&mut store).await?;
            let outcome = store.order(&id, qty, &buyer.form()).await?;
            report(&outcome);
        }
    }

    Ok(())
}

async fn load(store: &mut Storefront) -> anyhow::Result<()> {
    if let Some(error) = store.load_catalog().await.error() {
        bail!("Gagal memuat menu: {} ({})", error, error.code);
    }
    Ok(())
}

async fn cart_command(store: &mut Storefront, action: CartAction) -> anyhow::Result<()> {
    match action {
        CartAction::Add { id } => {
            load(store).await?;
            let line = store.add_to_cart(&id)?;
            println!("{} ({})", line.item.name, line.quantity_label());
        }
        CartAction::Set { id, quantity } => store.set_quantity(&id, quantity)?,
        CartAction::Remove { id } => store.remove_from_cart(&id)?,
        CartAction::Clear => store.cart_mut().clear(),
        CartAction::Show => {}
    }

    let cart = store.cart();
    if cart.is_empty() {
        println!("Keranjang kosong.");
        return Ok(());
    }
    for line in cart.lines() {
        println!(
            "[{}] {} {} = {}",
            line.id(),
            line.item.name,
            line.quantity_label(),
            format_rupiah(line.line_total())
        );
    }
    println!("Total: {}", format_total(cart.total()));
    Ok(())
}

fn report(outcome: &CheckoutOutcome) {
    match outcome.phase {
        CheckoutPhase::Succeeded => println!("Pesanan tercatat. Lanjutkan konfirmasi lewat WhatsApp."),
        _ => println!("Pesanan belum tercatat, konfirmasi lewat WhatsApp."),
    }
    if let Some(error) = &outcome.log_error {
        tracing::debug!(code = %error.code, details = ?error.details, "Order log error");
    }
    if !outcome.launched {
        println!("{}", outcome.chat_url);
    }
}
