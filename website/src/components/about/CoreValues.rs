/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

/// Company values listed under the about page features.
pub const CORE_VALUES: &[(&str, &str)] = &[
    (
        "Dedication",
        "We are dedicated to providing outstanding IT solutions and services, ensuring the success of our clients through unwavering commitment and effort;",
    ),
    (
        "Brilliance",
        "We strive for brilliance in all aspects of our work, delivering high-quality services and innovative solutions that set us apart in the IT industry;",
    ),
    (
        "Leadership",
        "We take the lead in technological advancements and industry trends, guiding our clients towards successful and informed decisions;",
    ),
    (
        "Integrity",
        "We conduct our business with honesty, transparency, and ethical standards, fostering trust and long-term relationships with our clients and partners;",
    ),
    (
        "Synergy",
        "We believe in the power of collaboration, working collaboratively within our organization and with our clients to achieve shared goals and deliver outstanding results;",
    ),
    (
        "Transformation",
        "We embrace transformation, continuously seeking to improve and innovate, staying ahead in the ever-evolving IT industry;",
    ),
    (
        "Security",
        "We prioritize the security of our clients' data and systems, implementing robust measures to protect against threats and ensure confidentiality and integrity;",
    ),
    (
        "Innovation",
        "True progress stems from individuals who think creatively and embrace fresh perspectives, which is precisely what we aim to inspire. We encourage a spirit of curiosity, urging individuals to question the status quo and devise innovative solutions to challenges. Complacency is not in our nature; our very DNA compels us to push boundaries and redefine possibilities.",
    ),
    (
        "Notable",
        "We take pride in our proven track record of successful projects. We ensure every transaction is meaningful, flexible, and designed to provide value, empowering our clients to achieve significant business growth.",
    ),
    (
        "Customer Experience",
        "Our unwavering focus on users is a cornerstone of our business. Indeed, it is the most critical factor in our success. We are committed to ensuring our customers not only meet but consistently surpass their expectations, achieving levels of satisfaction that inspire loyalty and trust.",
    ),
];
