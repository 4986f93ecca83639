use super::menu::MenuItem;

/// Charged when the subtotal is below [`FREE_DELIVERY_THRESHOLD`].
pub const DELIVERY_CHARGE: i64 = 10;
pub const FREE_DELIVERY_THRESHOLD: i64 = 41;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item_name: String,
    pub quantity: u32,
    pub unit_price: i64,
}

impl CartLine {
    pub fn line_total(&self) -> i64 {
        i64::from(self.quantity) * self.unit_price
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adding the same item twice keeps two lines, mirroring what the
    /// customer typed.
    pub fn add(&mut self, item: &MenuItem, quantity: u32) {
        self.lines.push(CartLine {
            item_name: item.name.to_string(),
            quantity,
            unit_price: item.price,
        });
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn subtotal(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn delivery_charge(&self) -> i64 {
        if self.subtotal() < FREE_DELIVERY_THRESHOLD {
            DELIVERY_CHARGE
        } else {
            0
        }
    }

    pub fn total(&self) -> i64 {
        self.subtotal() + self.delivery_charge()
    }

    /// One line per item plus the delivery charge when one applies.
    pub fn itemised(&self) -> String {
        let mut lines: Vec<String> = self
            .lines
            .iter()
            .map(|l| format!("{} x {} (₹{})", l.item_name, l.quantity, l.unit_price))
            .collect();

        let charge = self.delivery_charge();
        if charge > 0 {
            lines.push(format!("🚚 Delivery charge: ₹{charge}"));
        }
        lines.join("\n")
    }
}
