//! Curated English to Portuguese vocabulary.
//!
//! Every word used by the category table appears here, so batch generation
//! for known categories never reaches the remote provider.

pub(super) const ENTRIES: &[(&str, &str)] = &[
    // verbs
    ("be", "ser"),
    ("have", "ter"),
    ("do", "fazer"),
    ("go", "ir"),
    ("come", "vir"),
    ("see", "ver"),
    ("know", "saber"),
    ("want", "querer"),
    ("eat", "comer"),
    ("drink", "beber"),
    ("sleep", "dormir"),
    ("read", "ler"),
    ("write", "escrever"),
    ("speak", "falar"),
    ("listen", "ouvir"),
    ("study", "estudar"),
    ("learn", "aprender"),
    ("work", "trabalhar"),
    ("play", "jogar"),
    ("run", "correr"),
    ("walk", "andar"),
    ("open", "abrir"),
    ("close", "fechar"),
    ("buy", "comprar"),
    ("live", "viver"),
    ("love", "amar"),
    ("think", "pensar"),
    ("help", "ajudar"),
    // nouns
    ("house", "casa"),
    ("car", "carro"),
    ("book", "livro"),
    ("water", "água"),
    ("food", "comida"),
    ("friend", "amigo"),
    ("family", "família"),
    ("school", "escola"),
    ("city", "cidade"),
    ("time", "tempo"),
    ("day", "dia"),
    ("night", "noite"),
    ("year", "ano"),
    ("word", "palavra"),
    ("door", "porta"),
    ("window", "janela"),
    ("table", "mesa"),
    ("chair", "cadeira"),
    ("bed", "cama"),
    ("money", "dinheiro"),
    // animals
    ("cat", "gato"),
    ("dog", "cachorro"),
    ("bird", "pássaro"),
    ("fish", "peixe"),
    ("lion", "leão"),
    ("horse", "cavalo"),
    ("cow", "vaca"),
    // food
    ("apple", "maçã"),
    ("banana", "banana"),
    ("bread", "pão"),
    ("milk", "leite"),
    ("cheese", "queijo"),
    ("rice", "arroz"),
    ("egg", "ovo"),
    // family
    ("mother", "mãe"),
    ("father", "pai"),
    ("sister", "irmã"),
    ("brother", "irmão"),
    ("grandmother", "avó"),
    ("grandfather", "avô"),
    ("son", "filho"),
    // school
    ("pen", "caneta"),
    ("pencil", "lápis"),
    ("teacher", "professor"),
    ("student", "aluno"),
    ("notebook", "caderno"),
    // body
    ("head", "cabeça"),
    ("hand", "mão"),
    ("eye", "olho"),
    ("mouth", "boca"),
    ("foot", "pé"),
    ("arm", "braço"),
    ("leg", "perna"),
    // clothes
    ("shirt", "camisa"),
    ("shoe", "sapato"),
    ("hat", "chapéu"),
    ("dress", "vestido"),
    ("pants", "calça"),
    ("coat", "casaco"),
    ("sock", "meia"),
    // weather
    ("sun", "sol"),
    ("rain", "chuva"),
    ("snow", "neve"),
    ("wind", "vento"),
    ("cloud", "nuvem"),
    ("cold", "frio"),
    ("hot", "quente"),
    // house
    ("kitchen", "cozinha"),
    ("bathroom", "banheiro"),
    ("bedroom", "quarto"),
    // transport
    ("bus", "ônibus"),
    ("train", "trem"),
    ("plane", "avião"),
    ("bicycle", "bicicleta"),
    ("boat", "barco"),
    // adjectives
    ("red", "vermelho"),
    ("blue", "azul"),
    ("green", "verde"),
    ("yellow", "amarelo"),
    ("purple", "roxo"),
    ("black", "preto"),
    ("white", "branco"),
    ("big", "grande"),
    ("small", "pequeno"),
    ("good", "bom"),
    ("bad", "mau"),
    ("happy", "feliz"),
    ("sad", "triste"),
    ("new", "novo"),
    ("old", "velho"),
    ("beautiful", "bonito"),
    ("fast", "rápido"),
    ("slow", "lento"),
    // days
    ("monday", "segunda-feira"),
    ("tuesday", "terça-feira"),
    ("wednesday", "quarta-feira"),
    ("thursday", "quinta-feira"),
    ("friday", "sexta-feira"),
    ("saturday", "sábado"),
    ("sunday", "domingo"),
    // months
    ("january", "janeiro"),
    ("february", "fevereiro"),
    ("march", "março"),
    ("april", "abril"),
    ("may", "maio"),
    ("june", "junho"),
    ("july", "julho"),
    ("august", "agosto"),
    ("september", "setembro"),
    ("october", "outubro"),
    ("november", "novembro"),
    ("december", "dezembro"),
];
