use super::Card;

pub const AQUATICS_CARDS: &[Card] = &[
    Card {
        label: "Filtration",
        title: "Defender® Regenerative Media",
        body: "Gold standard commercial pool filtration. Filters to 1 micron. Up to 90% water savings, 30–50% chemical reduction vs. sand filters. Some facilities report ROI in under 1 year.",
    },
    Card {
        label: "UV Disinfection",
        title: "ETS-UV™ / ATG UV™ Wafer®",
        body: "Medium-pressure UV validated for 99.9% Crypto/Giardia reduction. Marketed for chloramine breakdown, improved air quality, and reduced shock treatments. Multi-barrier approach.",
    },
    Card {
        label: "Monitoring & Control",
        title: "Blu-Sentinel Controllers",
        body: "Neptune Benson × Wallace & Tiernan. Built-in Ethernet, remote smart device operation. Reduces chemical overspend via accurate dosing. Multi-site standardization.",
    },
    Card {
        label: "Global Disinfection",
        title: "Wedeco Brand",
        body: "250,000+ UV and ozone installations worldwide. Positioned as \"chemical-free and environmentally friendly\" treatment. Primarily municipal/industrial.",
    },
    Card {
        label: "Components",
        title: "Lawson Aquatics®",
        body: "Pool fittings and accessories. Completes the mechanical room offering alongside core treatment and monitoring platforms.",
    },
    Card {
        label: "Proven Installations",
        title: "Case Studies",
        body: "FINA World Championships, Georgia Aquarium, European resort spas, St. Petersburg FL (30% sodium hypochlorite reduction).",
    },
];
