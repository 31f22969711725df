//! Fixed reply texts and the keyword rules for free-text chatter.

pub const WELCOME: &str = "Hello and welcome to our General Store bot! \
We're thrilled to have you here. Our bot is designed to help make your shopping experience \
as easy and convenient as possible. \
We provide free delivery for 2 km area. You can browse our products, place orders, and track your \
deliveries all in one place. If you have any questions or need assistance, our friendly customer \
support team is always ready to help. Thank you for choosing our General Store and happy shopping!";

pub const HELP_LINES: &[&str] = &[
    "/start - Welcome to store",
    "/help - List of commands",
    "/inventory - List of available products",
    "/product_request - Customers who don't find their product in inventory list can request \
     owner by this command, owner will try to provide that. Usage: /product_request <product_name>",
    "/product_details - Show the description and price of a product. \
     Usage: /product_details <product_name>",
    "/status - Show which products are in stock",
    "/order - Add a product to the cart. Usage: /order <product_name> <quantity>",
    "/select - Pick a product and quantity step by step",
    "/cart - Show the products that are currently in the cart",
    "/checkout - Show the order summary and total price",
    "/confirm - Confirm the order",
    "/cancel - Cancel the order and remove all the items from the cart",
    "/contact - Contact details of the store",
    "/bill - Pay your bill",
];

pub const CONTACT: &str = "Address: 3. Madhav shopping, godadara, surat\n\
Contact number: 9328290952\n\
Email: matajistore11@gmail.com";

pub const ORDER_USAGE: &str =
    "Please provide in the following manner: /order <product_name> <quantity>";
pub const PRODUCT_REQUEST_USAGE: &str =
    "Please provide in the following manner: /product_request <product_name>";
pub const PRODUCT_DETAILS_USAGE: &str = "Please specify a product name.";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const INVALID_QUANTITY: &str = "Invalid quantity";
pub const NOT_ENOUGH_STOCK: &str = "Not enough stock";
pub const ORDER_TOO_LARGE: &str = "Sorry, that order is too large to price.";

pub const CART_EMPTY: &str = "Your cart is empty.";
pub const CART_EMPTY_USE_ORDER: &str =
    "Your cart is empty. Please add some items to your cart using /order command.";
pub const CART_CLEARED: &str = "Your cart has been cleared.";
pub const CART_ALREADY_EMPTY: &str = "Your cart is already empty.";
pub const ORDER_CONFIRMED: &str =
    "Thank you for your order! Your order has been confirmed and will be delivered soon.";
pub const CONFIRM_SHORT_STOCK: &str = "Sorry, some items in your cart are no longer in stock. \
Please check /cart and /inventory and update your order.";

pub const SELECT_PROMPT: &str = "Which product would you like? Send its name.";
pub const SELECT_UNAVAILABLE: &str = "Sorry, that product is not available.";
pub const SELECT_NOT_ENOUGH: &str = "Sorry, there is not enough quantity available.";

pub const BILL_PROMPT: &str = "Please select the following button to pay your bill:";
pub const BILL_BUTTON: &str = "Pay Now";
pub const BILL_TITLE: &str = "Product/Service Name";
pub const BILL_DESCRIPTION: &str = "Description of Product/Service";

pub const UNKNOWN_COMMAND: &str =
    "Sorry, I don't know that command. Send /help to see what I can do.";

pub const FALLBACK_REPLY: &str = "I don't understand";

/// Keyword rules for free text, tried top to bottom against the lower-cased
/// message.
pub const CANNED_RULES: &[(fn(&str) -> bool, &str)] = &[
    (says_hello, "Hey there!"),
    (asks_how_we_are, "I'm good!"),
];

fn says_hello(text: &str) -> bool {
    text.contains("hello")
}

fn asks_how_we_are(text: &str) -> bool {
    text.contains("how are you")
}

/// Reply to free text that is not part of a guided selection.
pub fn canned_reply(text: &str) -> &'static str {
    let text = text.to_lowercase();
    CANNED_RULES
        .iter()
        .find(|(matches, _)| matches(text.as_str()))
        .map(|(_, response)| *response)
        .unwrap_or(FALLBACK_REPLY)
}
