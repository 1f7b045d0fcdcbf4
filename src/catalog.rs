use crate::Phone;

/// The fixed handset table the calculator ranks.
pub fn catalog() -> Vec<Phone> {
    [
        ("iPhone 12", 4.0, 128.0, 3.0, 699.0, 9.0),
        ("ItelA56", 2.0, 32.0, 1.8, 100.0, 3.0),
        ("Tecno Camon 12", 4.0, 64.0, 2.0, 200.0, 4.0),
        ("Infinix Hot 10", 4.0, 64.0, 2.0, 180.0, 4.0),
        ("Huawei P30", 6.0, 128.0, 2.6, 599.0, 7.0),
        ("Google Pixel 7", 8.0, 128.0, 2.8, 599.0, 8.0),
        ("Xiaomi Redmi Note 10", 6.0, 128.0, 2.2, 299.0, 6.0),
        ("Samsung Galaxy S22", 8.0, 256.0, 3.0, 799.0, 8.0),
        ("Motorola Razr+", 8.0, 256.0, 3.2, 999.0, 6.0),
        ("iPhone XR", 3.0, 64.0, 2.5, 499.0, 9.0),
        ("Samsung Galaxy Note 10", 8.0, 256.0, 2.8, 949.0, 8.0),
    ]
    .into_iter()
    .map(
        |(name, memory, storage, cpu_frequency, price, brand_value)| Phone {
            name: name.to_string(),
            memory,
            storage,
            cpu_frequency,
            price,
            brand_value,
        },
    )
    .collect()
}
