#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    /// Price in whole rupees.
    pub price: i64,
}

pub const MENU: &[MenuItem] = &[
    MenuItem { name: "Jol Puchka (12 pcs)", price: 50 },
    MenuItem { name: "Jol Puchka (6 pcs)", price: 25 },
    MenuItem { name: "Doi Puchka (12 pcs)", price: 60 },
    MenuItem { name: "Doi Puchka (6 pcs)", price: 40 },
    MenuItem { name: "Alu Kabli (Full)", price: 40 },
    MenuItem { name: "Alu Kabli (Half)", price: 25 },
    MenuItem { name: "Papdi Chaat (Full)", price: 60 },
    MenuItem { name: "Papdi Chaat (Half)", price: 40 },
    MenuItem { name: "Chana Masala (Full)", price: 50 },
    MenuItem { name: "Chana Masala (Half)", price: 30 },
];

/// Looks an item up by its position in [`MENU`], which is what the inline
/// keyboard carries in its callback data.
pub fn find_item(index: usize) -> Option<&'static MenuItem> {
    MENU.get(index)
}

pub fn menu_text() -> String {
    let mut text = String::from("📜 Here's our menu:\n\n");
    for item in MENU {
        text.push_str(&format!("• {} - ₹{}\n", item.name, item.price));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lookup() {
        assert_eq!(find_item(0).map(|i| i.name), Some("Jol Puchka (12 pcs)"));
        assert_eq!(find_item(9).map(|i| i.price), Some(30));
        assert!(find_item(MENU.len()).is_none());
    }

    #[test]
    fn test_menu_text_lists_every_item() {
        let text = menu_text();
        for item in MENU {
            assert!(text.contains(item.name));
        }
        assert!(text.contains("₹60"));
    }
}
