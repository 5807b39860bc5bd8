// ABOUTME: Static base food catalogs grouped by role within a meal
// ABOUTME: Breakfast mains and sides, beverages, fruits, snacks, grains, legumes, vegetables, salads, proteins, dinner mains
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use super::{seed, DietTags, FoodSeed};
use crate::diet::portions::PortionCategory::{
    Beverage, Bread, Condiment, Curry, Fruit, Porridge, Protein, Rice, Snack, Vegetable,
};

const DAIRY: DietTags = DietTags::DAIRY;
const ROOT: DietTags = DietTags::ROOT;
const GLUTEN: DietTags = DietTags::GLUTEN;
const NUTS: DietTags = DietTags::NUTS;
const SOY: DietTags = DietTags::SOY;

pub(super) const BREAKFAST_MAINS: &[FoodSeed] = &[
    seed("vegetable poha", Porridge).tags(ROOT),
    seed("rava upma", Porridge).tags(GLUTEN),
    seed("moong dal chilla", Bread),
    seed("besan chilla", Bread),
    seed("masala oats", Porridge).tags(ROOT),
    seed("ragi porridge", Porridge),
    seed("idli", Bread),
    seed("vegetable dalia", Porridge).tags(GLUTEN),
    seed("foxtail millet upma", Porridge),
    seed("quinoa upma", Porridge),
    seed("methi thepla", Bread).tags(GLUTEN),
    seed("paneer bhurji", Curry).tags(DAIRY),
    seed("sprouted moong salad", Vegetable),
    seed("plain dosa", Bread),
    seed("vermicelli upma", Porridge).tags(GLUTEN),
    seed("tofu scramble", Curry).tags(SOY),
    seed("appam", Bread),
    seed("pesarattu", Bread).also(&["moong"]),
    seed("jowar upma", Porridge),
    seed("overnight oats", Porridge).tags(DAIRY),
    seed("sabudana khichdi", Porridge).tags(ROOT.union(NUTS)),
    seed("vegetable uttapam", Bread).tags(ROOT),
    seed("amaranth porridge", Porridge),
];

pub(super) const BREAKFAST_SIDES: &[FoodSeed] = &[
    seed("mint chutney", Condiment),
    seed("coconut chutney", Condiment),
    seed("tomato chutney", Condiment),
    seed("peanut chutney", Condiment).tags(NUTS),
    seed("sambar", Curry).also(&["toor"]),
    seed("curd", Curry).tags(DAIRY),
    seed("low-fat milk", Beverage).tags(DAIRY),
    seed("flaxseed chutney", Condiment),
    seed("hung curd dip", Condiment).tags(DAIRY),
    seed("sesame chutney", Condiment),
    seed("coriander chutney", Condiment),
];

pub(super) const BEVERAGES: &[FoodSeed] = &[
    seed("coconut water", Beverage),
    seed("lemon water", Beverage),
    seed("green tea", Beverage),
    seed("tulsi tea", Beverage),
    seed("jeera water", Beverage),
    seed("buttermilk", Beverage).tags(DAIRY),
    seed("masala chaas", Beverage).tags(DAIRY),
    seed("ginger tea", Beverage).tags(ROOT),
    seed("cinnamon tea", Beverage),
    seed("fortified soy drink", Beverage).tags(SOY),
    seed("sattu drink", Beverage).also(&["chana"]),
    seed("kokum sherbet", Beverage),
    seed("turmeric latte", Beverage).tags(DAIRY),
    seed("fennel water", Beverage),
    seed("hibiscus tea", Beverage),
];

pub(super) const FRUITS: &[FoodSeed] = &[
    seed("apple", Fruit),
    seed("banana", Fruit),
    seed("papaya", Fruit),
    seed("guava", Fruit),
    seed("orange", Fruit),
    seed("pear", Fruit),
    seed("pomegranate", Fruit),
    seed("watermelon", Fruit),
    seed("muskmelon", Fruit),
    seed("sweet lime", Fruit),
    seed("kiwi", Fruit),
    seed("chikoo", Fruit),
    seed("plums", Fruit),
    seed("pineapple", Fruit),
    seed("seasonal berries", Fruit),
];

pub(super) const SNACKS: &[FoodSeed] = &[
    seed("roasted chana", Snack),
    seed("roasted makhana", Snack),
    seed("moong sprouts chaat", Snack),
    seed("khakhra", Snack).tags(GLUTEN),
    seed("dhokla", Snack).also(&["besan"]),
    seed("murmura bhel", Snack).tags(ROOT),
    seed("roasted peanuts", Snack).tags(NUTS),
    seed("roasted sunflower seeds", Snack),
    seed("sweet corn chaat", Snack),
    seed("vegetable sandwich", Snack).tags(GLUTEN),
    seed("ragi cookies", Snack).tags(GLUTEN),
    seed("hummus", Snack).also(&["chana"]),
    seed("edamame", Snack).tags(SOY),
    seed("kala chana chaat", Snack),
    seed("poha chivda", Snack).tags(NUTS),
    seed("cucumber sticks", Snack),
];

pub(super) const BREADS: &[FoodSeed] = &[
    seed("whole wheat roti", Bread).tags(GLUTEN),
    seed("multigrain roti", Bread).tags(GLUTEN),
    seed("jowar roti", Bread),
    seed("bajra roti", Bread),
    seed("ragi roti", Bread),
    seed("missi roti", Bread).tags(GLUTEN).also(&["besan"]),
    seed("phulka", Bread).tags(GLUTEN),
    seed("makki roti", Bread),
    seed("bhakri", Bread).also(&["jowar"]),
];

pub(super) const RICE: &[FoodSeed] = &[
    seed("brown rice", Rice),
    seed("hand-pounded rice", Rice),
    seed("jeera rice", Rice),
    seed("lemon rice", Rice),
    seed("red rice", Rice),
    seed("quinoa pulao", Rice),
    seed("foxtail millet rice", Rice),
    seed("barnyard millet rice", Rice),
    seed("vegetable pulao", Rice).tags(ROOT),
    seed("coconut rice", Rice),
];

pub(super) const LEGUMES: &[FoodSeed] = &[
    seed("moong dal tadka", Curry),
    seed("masoor dal", Curry),
    seed("toor dal", Curry),
    seed("chana dal", Curry),
    seed("rajma curry", Curry),
    seed("chole masala", Curry).tags(ROOT),
    seed("lobia curry", Curry),
    seed("kala chana curry", Curry),
    seed("urad dal", Curry),
    seed("dal makhani", Curry).tags(DAIRY).also(&["urad", "rajma"]),
    seed("panchmel dal", Curry),
    seed("horse gram curry", Curry),
    seed("matki usal", Curry),
    seed("besan kadhi", Curry).tags(DAIRY),
    seed("green moong curry", Curry),
    seed("palak dal", Curry).also(&["toor"]),
    seed("mixed dal", Curry),
];

pub(super) const VEGETABLES: &[FoodSeed] = &[
    seed("bhindi masala", Vegetable),
    seed("lauki sabzi", Vegetable),
    seed("gobi matar", Vegetable),
    seed("tinda masala", Vegetable),
    seed("turai sabzi", Vegetable),
    seed("karela sabzi", Vegetable),
    seed("french beans poriyal", Vegetable),
    seed("pumpkin sabzi", Vegetable),
    seed("capsicum stir-fry", Vegetable),
    seed("cabbage stir-fry", Vegetable),
    seed("parwal sabzi", Vegetable),
    seed("mushroom masala", Vegetable),
    seed("drumstick curry", Vegetable),
    seed("baingan bharta", Vegetable).tags(ROOT),
    seed("aloo methi", Vegetable).tags(ROOT),
    seed("carrot beans poriyal", Vegetable).tags(ROOT),
    seed("mixed vegetable sabzi", Vegetable),
];

pub(super) const SALADS: &[FoodSeed] = &[
    seed("cucumber salad", Vegetable),
    seed("kachumber salad", Vegetable).tags(ROOT),
    seed("carrot salad", Vegetable).tags(ROOT),
    seed("beetroot salad", Vegetable).tags(ROOT),
    seed("cabbage slaw", Vegetable),
    seed("sprouted chana salad", Vegetable),
    seed("corn salad", Vegetable),
    seed("cucumber raita", Vegetable).tags(DAIRY),
    seed("boondi raita", Vegetable).tags(DAIRY).also(&["besan"]),
    seed("tomato salad", Vegetable),
    seed("lettuce salad", Vegetable),
    seed("mixed green salad", Vegetable),
];

pub(super) const PROTEINS: &[FoodSeed] = &[
    seed("paneer tikka", Protein).tags(DAIRY),
    seed("grilled paneer", Protein).tags(DAIRY),
    seed("tofu stir-fry", Protein).tags(SOY),
    seed("soya chunks curry", Protein).tags(SOY),
    seed("tempeh masala", Protein).tags(SOY),
    seed("chana tikki", Protein),
    seed("moong tikki", Protein),
    seed("peanut tikki", Protein).tags(NUTS),
    seed("quinoa patties", Protein),
    seed("lobia tikki", Protein),
];

pub(super) const DINNER_MAINS: &[FoodSeed] = &[
    seed("moong dal khichdi", Porridge),
    seed("dalia khichdi", Porridge).tags(GLUTEN),
    seed("foxtail millet khichdi", Porridge),
    seed("clear vegetable soup", Porridge),
    seed("lentil soup", Porridge).also(&["masoor"]),
    seed("quinoa khichdi", Porridge),
    seed("oats khichdi", Porridge),
    seed("bajra khichdi", Porridge),
    seed("spinach soup", Porridge),
    seed("pumpkin soup", Porridge),
    seed("tomato soup", Porridge),
    seed("vegetable stew", Porridge),
    seed("ragi dosa", Bread),
    seed("lauki soup", Porridge),
];
