use contracts::domain::product::OrderedProduct;
use contracts::domain::supplier::Supplier;
use contracts::domain::user::User;

/// Compose the order email for one supplier.
///
/// Pure function of its inputs: the same user, supplier and product list
/// always yield the same text, line for line. Products appear in input
/// order.
pub fn compose_supplier_email(
    user: &User,
    supplier: &Supplier,
    products: &[OrderedProduct],
) -> String {
    let mut items = String::new();
    for line in products {
        items.push_str(&format!(
            "\n{} Qty: {} {}",
            line.product.name, line.qty, line.product.unit
        ));
    }

    format!(
        "Dear {}\n\n{} would like to order the following items: \n{}\n\n\
         This is an auto generated email. \n\
         Please contact us if there are any issues with the order. \n\
         Regards \n\n{}\n{}\n{}",
        supplier.company_name,
        user.company_name,
        items,
        user.contact_name,
        user.company_name,
        user.email
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::product::Product;

    fn user() -> User {
        User {
            id: 1,
            email: "orders@corner-cafe.example".to_string(),
            contact_name: "Maria Lopez".to_string(),
            company_name: "Corner Cafe".to_string(),
        }
    }

    fn supplier() -> Supplier {
        Supplier {
            id: 2,
            user_id: 1,
            email: "sales@greens.example".to_string(),
            company_name: "Fresh Greens Ltd".to_string(),
            phone_number: "555-0101".to_string(),
            contact_name: "Tom".to_string(),
            deleted: false,
        }
    }

    fn line(id: i32, name: &str, unit: &str, qty: i32) -> OrderedProduct {
        OrderedProduct {
            product: Product {
                id,
                user_id: 1,
                supplier_id: 2,
                name: name.to_string(),
                unit: unit.to_string(),
                deleted: false,
            },
            qty,
        }
    }

    #[test]
    fn test_template_is_exact() {
        let lines = vec![line(10, "Tomatoes", "kg", 3), line(11, "Basil", "bunch", 2)];
        let email = compose_supplier_email(&user(), &supplier(), &lines);

        let expected = "Dear Fresh Greens Ltd\n\
                        \n\
                        Corner Cafe would like to order the following items: \n\
                        \n\
                        Tomatoes Qty: 3 kg\n\
                        Basil Qty: 2 bunch\n\
                        \n\
                        This is an auto generated email. \n\
                        Please contact us if there are any issues with the order. \n\
                        Regards \n\
                        \n\
                        Maria Lopez\n\
                        Corner Cafe\n\
                        orders@corner-cafe.example";
        assert_eq!(email, expected);
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let lines = vec![line(10, "Tomatoes", "kg", 3)];
        let a = compose_supplier_email(&user(), &supplier(), &lines);
        let b = compose_supplier_email(&user(), &supplier(), &lines);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_order_still_renders() {
        let email = compose_supplier_email(&user(), &supplier(), &[]);
        assert!(email.starts_with("Dear Fresh Greens Ltd\n"));
        assert!(email.contains("would like to order the following items: \n\n\n"));
    }
}
