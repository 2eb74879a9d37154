//! Bilingual label table: `(key, zh, en)`

pub(super) static ENTRIES: &[(&str, &str, &str)] = &[
    // shared fields
    ("field.date", "日期", "Date"),
    ("field.time", "时间", "Time"),
    ("field.location", "地点", "Location"),
    ("field.weather", "天气", "Weather"),
    ("field.rating", "评分", "Rating"),
    ("field.notes", "备注", "Notes"),
    ("field.thoughts", "感想", "Thoughts"),
    ("field.genre", "类型", "Genre"),
    ("field.duration", "时长", "Duration"),
    ("field.seat", "座位", "Seat"),
    ("common.total", "合计", "Total"),
    ("opt.weather.SUNNY", "晴", "Sunny"),
    ("opt.weather.CLOUDY", "多云", "Cloudy"),
    ("opt.weather.RAINY", "雨", "Rainy"),
    ("opt.weather.SNOWY", "雪", "Snowy"),
    // tiers
    ("tier.sleep.excellent", "优秀", "Excellent"),
    ("tier.sleep.good", "良好", "Good"),
    ("tier.sleep.fair", "一般", "Fair"),
    ("tier.sleep.poor", "较差", "Poor"),
    ("tier.caffeine.safe", "安全范围", "Safe Range"),
    ("tier.caffeine.moderate", "适量摄入", "Moderate"),
    ("tier.caffeine.high", "接近上限", "Near Limit"),
    ("tier.caffeine.danger", "超标警告", "Over Limit"),
    // export failures
    ("export.error.raster", "下载失败：图片生成出错", "Download failed: the image could not be drawn."),
    ("export.error.memory", "下载失败：内存不足", "Download failed: not enough memory."),
    ("export.error.hidden", "下载失败：收据不可见", "Download failed: the receipt is not visible."),
    ("export.error.timeout", "下载失败：生成超时", "Download failed: rendering took too long."),
    ("export.error.unknown", "下载失败：未知错误", "Download failed: unknown error."),
    ("export.hint.raster", "请稍后重试。", "Please try again."),
    ("export.hint.memory", "请关闭其他标签页或应用后重试。", "Close other tabs or apps and try again."),
    ("export.hint.hidden", "请切换到预览后重试。", "Switch to the preview and try again."),
    ("export.hint.timeout", "请稍后重试。", "Please try again in a moment."),
    ("export.hint.unknown", "请检查权限设置后重试。", "Check your permission settings and try again."),
    // life
    ("life.title", "LIFE_LOGGER", "LIFE_LOGGER"),
    ("life.subtitle", "// 日常日志小票", "// DAILY LIFE TRACKER"),
    ("life.tagline", "日志已存档", "LOG ARCHIVED"),
    ("life.ootd", "状态 / OOTD", "STATUS / OOTD"),
    ("life.stats", "每日数据", "Daily Stats"),
    ("life.stat.mood", "心情", "MOOD"),
    ("life.stat.energy", "精力", "ENERGY"),
    ("life.stat.focus", "专注", "FOCUS"),
    ("life.stat.stress", "压力", "STRESS"),
    ("life.tasks", "待办清单", "To-do"),
    ("life.note", "给自己的便条", "Note to self"),
    ("life.thoughts", "想法", "Thoughts"),
    // food
    ("food.title", "美食日志", "FOOD_LOG"),
    ("food.subtitle", "// 干饭小票", "// MEAL TRACKER"),
    ("food.tagline", "吃饱了才有力气", "FED AND HAPPY"),
    ("food.restaurant", "餐厅", "Restaurant"),
    ("food.companion", "同行", "With"),
    ("food.flavors", "口味", "Flavor Profile"),
    ("food.flavor.spicy", "辣", "SPICY"),
    ("food.flavor.sour", "酸", "SOUR"),
    ("food.flavor.sweet", "甜", "SWEET"),
    ("food.flavor.salty", "咸", "SALTY"),
    ("food.flavor.bitter", "苦", "BITTER"),
    ("food.satiety", "饱腹感", "Satiety"),
    // movie
    ("movie.title", "观影小票", "MOVIE_TICKET"),
    ("movie.subtitle", "// 电影记录", "// FILM JOURNAL"),
    ("movie.tagline", "散场不散心", "THE END"),
    ("movie.director", "导演", "Director"),
    ("movie.genre.SCI_FI", "科幻", "Sci-Fi"),
    ("movie.genre.DRAMA", "剧情", "Drama"),
    ("movie.genre.COMEDY", "喜剧", "Comedy"),
    ("movie.genre.ACTION", "动作", "Action"),
    ("movie.genre.HORROR", "恐怖", "Horror"),
    ("movie.genre.ANIMATION", "动画", "Animation"),
    ("movie.year", "年份", "Year"),
    ("movie.cinema", "影院", "Cinema"),
    ("movie.experience", "观影体验", "Experience"),
    ("movie.exp.visual", "视效", "VISUAL"),
    ("movie.exp.story", "剧情", "STORY"),
    ("movie.exp.acting", "演技", "ACTING"),
    ("movie.exp.music", "配乐", "MUSIC"),
    ("movie.emotion", "情绪", "Emotion"),
    ("movie.immersion", "沉浸感", "Immersion"),
    ("movie.scene", "最爱场景", "Favorite Scene"),
    // game
    ("game.title", "游戏小票", "GAME_RECEIPT"),
    ("game.subtitle", "// 游戏通关记录", "// PLAYTHROUGH LOG"),
    ("game.tagline", "再来一局", "ONE MORE RUN"),
    ("game.developer", "开发商", "Developer"),
    ("game.platform", "平台", "Platform"),
    ("game.genre.RPG", "角色扮演", "RPG"),
    ("game.genre.ACTION", "动作", "Action"),
    ("game.genre.STRATEGY", "策略", "Strategy"),
    ("game.genre.PUZZLE", "解谜", "Puzzle"),
    ("game.genre.SIMULATION", "模拟", "Simulation"),
    ("game.playtime", "游戏时长", "Playtime"),
    ("game.review", "游戏评价", "Review"),
    ("game.aspect.graphics", "画面", "GRAPHICS"),
    ("game.aspect.gameplay", "玩法", "GAMEPLAY"),
    ("game.aspect.story", "剧情", "STORY"),
    ("game.aspect.difficulty", "难度", "DIFFICULTY"),
    ("game.challenge", "挑战性", "Challenge"),
    ("game.addiction", "上瘾度", "Addiction"),
    ("game.completion", "完成度", "Completion"),
    ("game.achievement", "成就", "Achievement"),
    ("game.moment", "难忘瞬间", "Memorable Moment"),
    // music
    ("music.title", "演唱会小票", "CONCERT_LOG"),
    ("music.subtitle", "// 现场记录", "// LIVE MUSIC TRACKER"),
    ("music.tagline", "下次现场见", "SEE YOU AT THE NEXT SHOW"),
    ("music.tour", "巡演", "Tour"),
    ("music.venue", "场馆类型", "Venue"),
    ("music.venue.STADIUM", "体育场", "Stadium"),
    ("music.venue.ARENA", "体育馆", "Arena"),
    ("music.venue.THEATER", "剧院", "Theater"),
    ("music.venue.LIVEHOUSE", "Livehouse", "Livehouse"),
    ("music.venue.FESTIVAL", "音乐节", "Festival"),
    ("music.genre.POP", "流行", "Pop"),
    ("music.genre.ROCK", "摇滚", "Rock"),
    ("music.genre.JAZZ", "爵士", "Jazz"),
    ("music.genre.HIPHOP", "说唱", "Hip-hop"),
    ("music.genre.ELECTRONIC", "电子", "Electronic"),
    ("music.genre.CLASSICAL", "古典", "Classical"),
    ("music.setlist", "歌单", "Setlist"),
    ("music.experience", "现场体验", "Experience"),
    ("music.exp.acoustic", "音质", "ACOUSTIC"),
    ("music.exp.visual", "舞美", "VISUAL"),
    ("music.exp.atmosphere", "氛围", "ATMOSPHERE"),
    ("music.exp.energy", "能量", "ENERGY"),
    ("music.exp.vocals", "唱功", "VOCALS"),
    ("music.favorite", "最爱曲目", "Favorite Song"),
    ("music.surprise", "惊喜时刻", "Surprise Moment"),
    // idol
    ("idol.title", "追星小票", "IDOL_LOG"),
    ("idol.subtitle", "// 饭圈消费记录", "// FANDOM TRACKER"),
    ("idol.tagline", "为爱发电", "POWERED BY LOVE"),
    ("idol.activity", "活动", "Activity"),
    ("idol.activity.COMEBACK", "回归", "Comeback"),
    ("idol.activity.CONCERT", "演唱会", "Concert"),
    ("idol.activity.FANSIGN", "签售", "Fansign"),
    ("idol.activity.VARIETY", "综艺", "Variety"),
    ("idol.identity", "身份", "Identity"),
    ("idol.identity.MOM", "妈粉", "Mom Fan"),
    ("idol.identity.GIRLFRIEND", "女友粉", "Girlfriend Fan"),
    ("idol.identity.BOYFRIEND", "男友粉", "Boyfriend Fan"),
    ("idol.identity.FAN", "路人粉", "Casual Fan"),
    ("idol.stats", "状态", "Status"),
    ("idol.stat.dopamine", "多巴胺", "DOPAMINE"),
    ("idol.stat.sanity", "理智", "SANITY"),
    ("idol.stat.wallet", "钱包", "WALLET"),
    ("idol.scream", "尖叫指数", "Scream Level"),
    ("idol.highlight", "高光时刻", "Highlight"),
    ("idol.promise", "承诺", "Promise"),
    // reading
    ("reading.title", "阅读小票", "READING_LOG"),
    ("reading.subtitle", "// 读书记录", "// BOOK TRACKER"),
    ("reading.tagline", "书中自有黄金屋", "KEEP READING"),
    ("reading.author", "作者", "Author"),
    ("reading.format", "形式", "Format"),
    ("reading.format.PAPER", "纸质书", "Paper"),
    ("reading.format.EBOOK", "电子书", "E-book"),
    ("reading.format.AUDIO", "有声书", "Audiobook"),
    ("reading.genre.FICTION", "小说", "Fiction"),
    ("reading.genre.NONFICTION", "非虚构", "Non-fiction"),
    ("reading.genre.POETRY", "诗歌", "Poetry"),
    ("reading.genre.SCIENCE", "科学", "Science"),
    ("reading.genre.HISTORY", "历史", "History"),
    ("reading.pages", "页数", "Pages"),
    ("reading.metrics", "阅读体验", "Reading Metrics"),
    ("reading.metric.immersion", "沉浸", "IMMERSION"),
    ("reading.metric.intellect", "思想", "INTELLECT"),
    ("reading.metric.emotion", "情感", "EMOTION"),
    ("reading.metric.writing", "文笔", "WRITING"),
    ("reading.quote", "摘抄", "Quote"),
    ("reading.review", "书评", "Review"),
    // travel
    ("travel.title", "旅行日志", "BOARDING_PASS"),
    ("travel.subtitle", "// 旅行日志小票", "// TRAVEL LOG"),
    ("travel.tagline", "在路上", "ON THE ROAD"),
    ("travel.origin", "出发地", "From"),
    ("travel.dest", "目的地", "To"),
    ("travel.transport", "交通方式", "Transport"),
    ("travel.transport.FLIGHT", "飞机", "Flight"),
    ("travel.transport.TRAIN", "高铁/火车", "Train"),
    ("travel.transport.CAR", "自驾", "Car"),
    ("travel.transport.BUS", "大巴", "Bus"),
    ("travel.transport.WALK", "徒步/特种兵", "On Foot"),
    ("travel.transport.SHIP", "轮渡", "Ferry"),
    ("travel.class", "旅行风格", "Class"),
    ("travel.class.BUDGET", "穷游", "Budget"),
    ("travel.class.COMFORT", "舒适", "Comfort"),
    ("travel.class.LUXURY", "豪华", "Luxury"),
    ("travel.stats", "旅途状态", "Trip Stats"),
    ("travel.metric.fatigue", "疲劳度", "FATIGUE"),
    ("travel.metric.novelty", "新鲜感", "NOVELTY"),
    ("travel.metric.budget", "预算消耗", "BUDGET"),
    ("travel.metric.mood", "心情", "MOOD"),
    ("travel.memo", "备忘录", "Memo"),
    // fitness
    ("fitness.title", "健身小票", "FITNESS_LOG"),
    ("fitness.subtitle", "// 训练记录", "// WORKOUT TRACKER"),
    ("fitness.tagline", "NO PAIN NO GAIN", "NO PAIN NO GAIN"),
    ("fitness.type", "训练部位", "Workout"),
    ("fitness.type.LEGS", "练腿日", "Leg Day"),
    ("fitness.type.CHEST", "练胸日", "Chest Day"),
    ("fitness.type.BACK", "练背日", "Back Day"),
    ("fitness.type.ARMS", "手臂", "Arms"),
    ("fitness.type.CARDIO", "有氧", "Cardio"),
    ("fitness.type.YOGA", "瑜伽", "Yoga"),
    ("fitness.calories", "消耗热量", "Calories"),
    ("fitness.exercises", "训练动作", "Exercises"),
    ("fitness.metrics", "训练感受", "Body Metrics"),
    ("fitness.metric.pump", "泵感", "PUMP"),
    ("fitness.metric.pain", "酸痛", "PAIN"),
    ("fitness.metric.sweat", "出汗", "SWEAT"),
    ("fitness.metric.focus", "专注", "FOCUS"),
    ("fitness.intensity", "强度", "Intensity"),
    // social
    ("social.title", "社交小票", "SOCIAL_LOG"),
    ("social.subtitle", "// 社交能量记录", "// SOCIAL BATTERY TRACKER"),
    ("social.tagline", "电量耗尽，快乐充满", "BATTERY LOW, HEART FULL"),
    ("social.event", "活动", "Event"),
    ("social.people", "参与者", "People"),
    ("social.vibe", "氛围", "Vibe"),
    ("social.vibe.CHILL", "轻松", "Chill"),
    ("social.vibe.HYPE", "嗨", "Hype"),
    ("social.vibe.AWKWARD", "尴尬", "Awkward"),
    ("social.vibe.DEEP", "走心", "Deep Talk"),
    ("social.metrics", "社交数据", "Social Stats"),
    ("social.metric.battery", "电量", "BATTERY"),
    ("social.metric.fun", "快乐", "FUN"),
    ("social.metric.chatter", "话量", "CHATTER"),
    ("social.metric.awkward", "尴尬", "AWKWARD"),
    ("social.highlight", "高光时刻", "Highlight"),
    // sleep
    ("sleep.title", "睡眠日志", "SLEEP_LOG"),
    ("sleep.subtitle", "// 睡眠记录小票", "// SLEEP TRACKER"),
    ("sleep.tagline", "SWEET DREAMS", "SWEET DREAMS"),
    ("sleep.bedtime", "入睡时间", "Bedtime"),
    ("sleep.wake", "起床时间", "Wake Time"),
    ("sleep.mood", "起床心情", "Morning Mood"),
    ("sleep.mood.REFRESHED", "神清气爽", "Refreshed"),
    ("sleep.mood.NORMAL", "正常", "Normal"),
    ("sleep.mood.TIRED", "疲惫", "Tired"),
    ("sleep.mood.GROGGY", "昏沉", "Groggy"),
    ("sleep.mood.ANXIOUS", "焦虑", "Anxious"),
    ("sleep.presleep", "睡前活动", "Pre-sleep"),
    ("sleep.activity.phone", "看手机", "Phone"),
    ("sleep.activity.reading", "阅读", "Reading"),
    ("sleep.activity.exercise", "运动", "Exercise"),
    ("sleep.activity.caffeine", "咖啡因", "Caffeine"),
    ("sleep.activity.alcohol", "酒精", "Alcohol"),
    ("sleep.activity.bath", "热水澡", "Hot Bath"),
    ("sleep.activity.work", "工作", "Work"),
    ("sleep.activity.meditation", "冥想", "Meditation"),
    ("sleep.metrics", "睡眠质量", "Quality Metrics"),
    ("sleep.metric.quality", "睡眠质量", "QUALITY"),
    ("sleep.metric.dreamClarity", "梦境清晰度", "DREAM"),
    ("sleep.metric.wakeFreshness", "起床精神度", "FRESHNESS"),
    ("sleep.metric.deepSleep", "深度睡眠感", "DEEP SLEEP"),
    ("sleep.dream", "梦境内容", "Dream Content"),
    ("sleep.score", "睡眠评分", "Sleep Score"),
    // coffee
    ("coffee.title", "咖啡因日志", "CAFFEINE_LOG"),
    ("coffee.subtitle", "// 咖啡记录小票", "// COFFEE TRACKER"),
    ("coffee.tagline", "BUT FIRST, COFFEE", "BUT FIRST, COFFEE"),
    ("coffee.shop", "咖啡店", "Shop"),
    ("coffee.drink", "饮品", "Drink"),
    ("coffee.size", "杯型", "Size"),
    ("coffee.size.SMALL", "小杯", "Small"),
    ("coffee.size.MEDIUM", "中杯", "Medium"),
    ("coffee.size.LARGE", "大杯", "Large"),
    ("coffee.method", "做法", "Method"),
    ("coffee.method.AMERICANO", "美式", "Americano"),
    ("coffee.method.LATTE", "拿铁", "Latte"),
    ("coffee.method.ESPRESSO", "浓缩", "Espresso"),
    ("coffee.method.POUR_OVER", "手冲", "Pour Over"),
    ("coffee.method.COLD_BREW", "冷萃", "Cold Brew"),
    ("coffee.bean", "咖啡豆", "Bean"),
    ("coffee.price", "价格", "Price"),
    ("coffee.caffeine", "咖啡因摄入", "Caffeine Intake"),
    ("coffee.this_cup", "本杯", "This Cup"),
    ("coffee.today", "今日累计", "Today Total"),
    ("coffee.status", "状态", "Status"),
    ("coffee.flavor", "风味", "Flavor"),
    ("coffee.metric.bitterness", "苦度", "BITTER"),
    ("coffee.metric.acidity", "酸度", "ACIDITY"),
    ("coffee.metric.sweetness", "甜度", "SWEET"),
    ("coffee.metric.satisfaction", "满意度", "SATISFY"),
    // shopping
    ("shopping.title", "购物小票", "SPENDING_LOG"),
    ("shopping.subtitle", "// 消费记录小票", "// SHOPPING TRACKER"),
    ("shopping.tagline", "买买买", "RETAIL THERAPY"),
    ("shopping.channel", "渠道", "Channel"),
    ("shopping.channel.OFFLINE", "线下", "In-store"),
    ("shopping.channel.ONLINE", "线上", "Online"),
    ("shopping.channel.SECONDHAND", "二手", "Second-hand"),
    ("shopping.category", "品类", "Category"),
    ("shopping.category.CLOTHING", "服饰", "Clothing"),
    ("shopping.category.FOOD", "食品", "Food"),
    ("shopping.category.DIGITAL", "数码", "Digital"),
    ("shopping.category.BEAUTY", "美妆", "Beauty"),
    ("shopping.category.HOME", "家居", "Home"),
    ("shopping.category.OTHER", "其他", "Other"),
    ("shopping.metrics", "消费评估", "Spending Metrics"),
    ("shopping.metric.necessity", "必要性", "NEED"),
    ("shopping.metric.regret", "后悔度", "REGRET"),
    ("shopping.metric.joy", "快乐值", "JOY"),
    ("shopping.metric.value", "性价比", "VALUE"),
    ("shopping.verdict", "消费判定", "Verdict"),
    ("shopping.verdict.RATIONAL", "理性消费", "Rational"),
    ("shopping.verdict.IMPULSE", "冲动消费", "Impulse Buy"),
    ("shopping.verdict.TREAT", "犒劳自己", "Treat Yourself"),
    ("shopping.verdict.REGRET", "剁手预警", "Regret"),
];
