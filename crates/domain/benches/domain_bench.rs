use common::{MenuItemId, NewCartItem, NewMenuItem, UserId};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{CartService, MenuService};
use entity_store::MemStorage;
use rust_decimal::Decimal;

fn make_item(n: usize) -> NewMenuItem {
    NewMenuItem {
        name: format!("Item {n}"),
        description: Some("A benchmark dish with a searchable description".to_string()),
        price: Decimal::new(1200, 2),
        image: None,
        rating: Decimal::new(40, 1),
        preparation_time: 15,
        calories: None,
        restaurant: "Bench Kitchen".to_string(),
        category_id: None,
        is_available: true,
        is_featured: n % 10 == 0,
        is_popular: n % 3 == 0,
    }
}

fn seeded_menu(rt: &tokio::runtime::Runtime, items: usize) -> (MemStorage, MenuService) {
    let storage = MemStorage::new();
    let menu = MenuService::new(storage.clone());
    rt.block_on(async {
        for n in 0..items {
            menu.create_menu_item(make_item(n)).await;
        }
    });
    (storage, menu)
}

fn bench_search_500(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (_storage, menu) = seeded_menu(&rt, 500);

    c.bench_function("domain/search_500", |b| {
        b.iter(|| rt.block_on(menu.search("searchable")));
    });
}

fn bench_cart_summary_100_rows(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let (storage, _menu) = seeded_menu(&rt, 100);
    let cart = CartService::new(storage);
    let user = UserId::from(1);

    rt.block_on(async {
        for n in 1..=100 {
            cart.add_to_cart(NewCartItem {
                user_id: user,
                menu_item_id: MenuItemId::from(n),
                quantity: 2,
                price: Decimal::new(1200, 2),
            })
            .await
            .unwrap();
        }
    });

    c.bench_function("domain/cart_summary_100_rows", |b| {
        b.iter(|| rt.block_on(cart.summary(user)));
    });
}

fn bench_add_or_increment(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("domain/add_or_increment", |b| {
        b.iter(|| {
            rt.block_on(async {
                let storage = MemStorage::with_sample_data();
                let cart = CartService::new(storage);
                cart.add_or_increment(UserId::from(1), MenuItemId::from(1))
                    .await
                    .unwrap()
            })
        });
    });
}

criterion_group!(
    benches,
    bench_search_500,
    bench_cart_summary_100_rows,
    bench_add_or_increment
);
criterion_main!(benches);
